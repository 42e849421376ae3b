/// Number of questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;
