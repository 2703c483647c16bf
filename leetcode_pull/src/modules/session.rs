use leetcode_pull_libs::SessionToken;
use std::io::{self, BufRead, Write};

const SEPARATOR: &str = "==================================================";

const INSTRUCTIONS: &str = "To retrieve your LeetCode session cookie, follow these steps:
1. Open a web browser and log in to your LeetCode account.
2. Open the browser's developer tools (right-click > 'Inspect' or press F12).
3. Navigate to the 'Application' or 'Storage' tab in the developer tools.
4. Select 'Cookies' under 'Storage' and look for 'leetcode.com'.
5. Find the cookie named 'LEETCODE_SESSION' and copy its value.
6. Paste the cookie value below.";

/// Writes the cookie instructions to `output` and reads one line from `input`.
///
/// Returns `None` when nothing but whitespace was entered or the input is closed.
pub fn prompt_for_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<SessionToken>> {
    writeln!(output, "\n")?;
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output, "LeetCode Session Cookie Required")?;
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output, "{}", INSTRUCTIONS)?;
    writeln!(output, "{}", SEPARATOR)?;
    write!(output, "Enter your LEETCODE_SESSION cookie: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(SessionToken::parse(&line))
}

/// Resolves the session cookie from the command line, then the environment, then the operator.
pub fn resolve_session<R: BufRead, W: Write>(
    from_args: Option<&str>,
    from_env: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<SessionToken>> {
    if let Some(token) = from_args.and_then(SessionToken::parse) {
        tracing::info!("Using the session cookie given on the command line.");
        return Ok(Some(token));
    }
    if let Some(token) = from_env.and_then(SessionToken::parse) {
        tracing::info!("Using the session cookie from LEETCODE_SESSION.");
        return Ok(Some(token));
    }

    prompt_for_session(input, output)
}
