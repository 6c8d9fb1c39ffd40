use nanoid::nanoid;

/// Characters a short code may contain.
pub const CODE_ALPHABET: [char; 62] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9',
];

pub const MIN_CODE_LENGTH: usize = 3;
pub const MAX_CODE_LENGTH: usize = 8;
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes that collide with fixed route prefixes and can never be resolved.
pub const RESERVED_CODES: &[&str] = &["api"];

/// Produces candidate short codes.
///
/// Implementations never touch the store; uniqueness is checked by the
/// caller through a create-if-absent write.
pub trait CodeGenerator: Send + Sync {
    fn generate_code(&self, long_url: &str) -> String;
}

/// Random fixed-length codes drawn from [`CODE_ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self, _long_url: &str) -> String {
        let length = self.length;
        nanoid!(length, &CODE_ALPHABET)
    }
}

/// True when `code` is taken by a route and must not be minted.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Check that a code has an allowed length and only alphanumeric characters.
pub fn is_valid_short_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}
