use std::cmp::Ordering;

/// A dependency version string parsed for normalized comparison.
///
/// Dependency versions are not strict SemVer: `1.0`, `1.0.0.Final` and
/// `2.1-SNAPSHOT` are all legal. Comparison is component-wise: numeric
/// segments compare numerically, qualifier segments compare
/// case-insensitively, and trailing zero segments are insignificant, so
/// `1.0` equals `1.0.0`. A version with a qualifier orders before the same
/// version without one (`1.0-alpha` < `1.0`).
#[derive(Debug, Clone)]
pub struct ArtifactVersion {
    raw: String,
    tokens: Vec<Token>,
}

/// Equality is semantic (token-based), so `1.0` equals `1.0.0` even though
/// the raw strings differ; consistent with the `Ord` implementation below.
impl PartialEq for ArtifactVersion {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for ArtifactVersion {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Numeric(u64),
    Qualifier(String),
}

impl ArtifactVersion {
    /// Parsing is total: any string yields a comparable version.
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<Token> = raw
            .split(['.', '-'])
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.parse::<u64>() {
                Ok(n) => Token::Numeric(n),
                Err(_) => Token::Qualifier(segment.to_lowercase()),
            })
            .collect();

        // Trailing zeros are insignificant: 1.0 == 1.0.0
        while matches!(tokens.last(), Some(Token::Numeric(0))) {
            tokens.pop();
        }

        Self {
            raw: raw.to_string(),
            tokens,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Semantic equality; distinct from raw string equality.
    pub fn matches(&self, other: &ArtifactVersion) -> bool {
        self.tokens == other.tokens
    }
}

impl PartialOrd for ArtifactVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArtifactVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.tokens.len().max(other.tokens.len());
        for i in 0..len {
            let ordering = match (self.tokens.get(i), other.tokens.get(i)) {
                (Some(Token::Numeric(a)), Some(Token::Numeric(b))) => a.cmp(b),
                (Some(Token::Qualifier(a)), Some(Token::Qualifier(b))) => a.cmp(b),
                // A numeric segment outranks a qualifier: 1.1 > 1.alpha
                (Some(Token::Numeric(_)), Some(Token::Qualifier(_))) => Ordering::Greater,
                (Some(Token::Qualifier(_)), Some(Token::Numeric(_))) => Ordering::Less,
                // Exhausted side acts as zero; a bare qualifier sorts below it
                (Some(Token::Numeric(a)), None) => a.cmp(&0),
                (None, Some(Token::Numeric(b))) => 0u64.cmp(b),
                (Some(Token::Qualifier(_)), None) => Ordering::Less,
                (None, Some(Token::Qualifier(_))) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
