pub mod match_precedence;

pub use match_precedence::MatchPrecedence;
