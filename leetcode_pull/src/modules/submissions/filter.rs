use leetcode_pull_libs::SubmissionSummary;
use std::collections::HashMap;

pub const ACCEPTED: &str = "Accepted";

/// The most recent accepted submission of each problem, kept in first-seen order of the titles.
#[derive(Debug, Default)]
pub struct AcceptedSolutions {
    solutions: Vec<SubmissionSummary>,
    index: HashMap<String, usize>,
}

impl AcceptedSolutions {
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, title: &str) -> Option<&SubmissionSummary> {
        self.index.get(title).map(|&i| &self.solutions[i])
    }

    /// Stores `submission` unless a submission with the same title and an equal or newer
    /// timestamp is already kept.
    fn offer(&mut self, submission: SubmissionSummary) {
        match self.index.get(&submission.title) {
            Some(&i) => {
                if submission.timestamp > self.solutions[i].timestamp {
                    self.solutions[i] = submission;
                }
            }
            None => {
                self.index
                    .insert(submission.title.clone(), self.solutions.len());
                self.solutions.push(submission);
            }
        }
    }
}

impl IntoIterator for AcceptedSolutions {
    type Item = SubmissionSummary;
    type IntoIter = std::vec::IntoIter<SubmissionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

pub fn filter_most_recent_accepted<I>(submissions: I) -> AcceptedSolutions
where
    I: IntoIterator<Item = SubmissionSummary>,
{
    let mut accepted = AcceptedSolutions::default();
    submissions
        .into_iter()
        .filter(|submission| submission.status_display == ACCEPTED)
        .for_each(|submission| accepted.offer(submission));

    tracing::info!("Filtered {} accepted solutions.", accepted.len());
    accepted
}

#[cfg(test)]
mod test {
    use super::*;

    fn summary(id: i64, title: &str, lang: &str, status: &str, timestamp: i64) -> SubmissionSummary {
        SubmissionSummary {
            id,
            title: String::from(title),
            lang: String::from(lang),
            status_display: String::from(status),
            timestamp,
        }
    }

    #[test]
    fn keep_latest_accepted_submission_per_title() {
        let submissions = vec![
            summary(10, "A", "java", "Accepted", 100),
            summary(11, "A", "java", "Accepted", 200),
            summary(12, "B", "go", "Wrong Answer", 150),
        ];

        let accepted = filter_most_recent_accepted(submissions);

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted.get("A").unwrap().id, 11);
        assert!(accepted.get("B").is_none());
    }

    #[test]
    fn newer_rejected_submission_does_not_win() {
        let submissions = vec![
            summary(1, "A", "cpp", "Accepted", 100),
            summary(2, "A", "cpp", "Time Limit Exceeded", 300),
        ];

        let accepted = filter_most_recent_accepted(submissions);

        assert_eq!(accepted.get("A").unwrap().id, 1);
    }

    #[test]
    fn order_of_input_does_not_matter_for_newest() {
        let submissions = vec![
            summary(3, "A", "cpp", "Accepted", 300),
            summary(1, "A", "cpp", "Accepted", 100),
            summary(2, "A", "cpp", "Accepted", 200),
        ];

        let accepted = filter_most_recent_accepted(submissions);

        assert_eq!(accepted.get("A").unwrap().id, 3);
    }

    #[test]
    fn equal_timestamps_keep_first_encountered() {
        let submissions = vec![
            summary(1, "A", "cpp", "Accepted", 100),
            summary(2, "A", "python3", "Accepted", 100),
        ];

        let accepted = filter_most_recent_accepted(submissions);

        assert_eq!(accepted.get("A").unwrap().id, 1);
    }

    #[test]
    fn no_accepted_submission_yields_empty_result() {
        let submissions = vec![
            summary(1, "A", "cpp", "Wrong Answer", 100),
            summary(2, "B", "cpp", "Runtime Error", 200),
            summary(3, "C", "cpp", "accepted", 300),
        ];

        assert!(filter_most_recent_accepted(submissions).is_empty());
    }

    #[test]
    fn titles_keep_first_seen_order() {
        let submissions = vec![
            summary(1, "B", "cpp", "Accepted", 100),
            summary(2, "A", "cpp", "Accepted", 100),
            summary(3, "B", "cpp", "Accepted", 200),
        ];

        let ids: Vec<i64> = filter_most_recent_accepted(submissions)
            .into_iter()
            .map(|submission| submission.id)
            .collect();

        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn one_entry_per_title_with_maximum_timestamp() {
        let mut submissions = Vec::new();
        for i in 0..60 {
            let title = format!("T{}", i % 7);
            let status = if i % 3 == 0 { "Wrong Answer" } else { "Accepted" };
            submissions.push(summary(i, &title, "go", status, (i * 37) % 50));
        }

        let accepted = filter_most_recent_accepted(submissions.clone());

        for title in (0..7).map(|i| format!("T{}", i)) {
            let expected = submissions
                .iter()
                .filter(|s| s.title == title && s.status_display == ACCEPTED)
                .map(|s| s.timestamp)
                .max();
            assert_eq!(accepted.get(&title).map(|s| s.timestamp), expected);
        }
        assert!(accepted.len() <= 7);
    }
}
