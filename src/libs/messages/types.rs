/// Every user-facing message of the application.
///
/// Text lives in the `Display` impl in `display.rs`, so wording can change in
/// one place without touching call sites.
#[derive(Debug, Clone)]
pub enum Message {
    // === EVALUATION MESSAGES ===
    Evaluating(String),       // ticket url
    Evaluated(String, usize), // ticket url, comment count
    NoCommentsFound(u64),     // ticket id
    UnansweredComments(usize),
    AgentRepliesWithoutQuestion(usize),

    // === ZENDESK MESSAGES ===
    FetchingComments(u64), // ticket id
    FetchedCommentsPage {
        page: usize,
        comments: usize,
        public: usize,
    },
    UnknownCommentAuthor {
        comment: u64,
        author: u64,
    },

    // === REPORT MESSAGES ===
    ReportGenerated(String), // path
    ReportHeader(u64),       // ticket id
    OutputNotCsv(String),    // path

    // === CONFIGURATION MESSAGES ===
    DotenvLoaded(String), // path
}
