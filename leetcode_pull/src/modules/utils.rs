pub const FALLBACK_EXTENSION: &str = ".txt";

/// Lowercases the language name reported by the judge and keeps the token before the first space,
/// e.g. `"Python3"` -> `"python3"`, `"C++ 17"` -> `"c++"`.
pub fn normalize_language(language: &str) -> String {
    language
        .to_lowercase()
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn language_to_extension(normalized: &str) -> Option<&'static str> {
    let extension = match normalized {
        "python3" | "python" => ".py",
        "java" | "java8" | "java11" => ".java",
        "cpp" => ".cpp",
        "c" => ".c",
        "csharp" => ".cs",
        "javascript" => ".js",
        "typescript" => ".ts",
        "ruby" => ".rb",
        "swift" => ".swift",
        "kotlin" => ".kt",
        "go" | "golang" => ".go",
        "rust" => ".rs",
        "scala" => ".scala",
        "php" => ".php",
        "mysql" => ".sql",
        "bash" => ".sh",
        _ => return None,
    };
    Some(extension)
}

/// Returns the file extension for the language, falling back to `.txt` with a warning.
pub fn extension_for(language: &str, title: &str) -> &'static str {
    match language_to_extension(&normalize_language(language)) {
        Some(extension) => extension,
        None => {
            tracing::warn!(
                "Unrecognized language '{}' for '{}'. Defaulting to {}.",
                language,
                title,
                FALLBACK_EXTENSION
            );
            FALLBACK_EXTENSION
        }
    }
}

/// `<question id>. <title with spaces replaced by underscores><extension>`
pub fn solution_filename(question_frontend_id: &str, title: &str, extension: &str) -> String {
    format!(
        "{}. {}{}",
        question_frontend_id,
        title.replace(' ', "_"),
        extension
    )
}
