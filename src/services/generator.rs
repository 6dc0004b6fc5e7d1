use crate::models::GenerationRequest;
use crate::services::random::{RandomSource, RngSource};
use rand::rngs::OsRng;
use thiserror::Error;

/// Errors that can occur while generating a password
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Password length must be a positive number (got {0})")]
    InvalidLength(i64),

    #[error("No character class selected")]
    NoCharacterClassSelected,
}

/// Generate one password for `request`, drawing from `source`.
///
/// The result:
/// - is exactly `request.length` characters long
/// - only uses characters from the selected classes
/// - holds one seed character per selected class, in class order
///   (uppercase, lowercase, digits, symbols). When the length is shorter than
///   the number of selected classes the seeds are truncated, keeping the
///   earliest classes.
/// - is filled up with uniform draws from the combined alphabet
/// - is permuted as a whole when `request.shuffle` is set; otherwise seeds come
///   first and fill characters after
///
/// The class check runs before the length check, so a request with no class
/// selected always fails with [`GenerationError::NoCharacterClassSelected`].
pub fn generate<R>(request: &GenerationRequest, source: &mut R) -> Result<String, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let classes = request.selected_classes();
    if classes.is_empty() {
        return Err(GenerationError::NoCharacterClassSelected);
    }
    if request.length == 0 {
        return Err(GenerationError::InvalidLength(0));
    }

    let alphabet = request.alphabet();
    let mut password: Vec<char> = Vec::with_capacity(request.length);

    for class in classes.iter().take(request.length) {
        password.push(pick(source, class.alphabet()));
    }

    while password.len() < request.length {
        password.push(pick(source, &alphabet));
    }

    if request.shuffle {
        source.shuffle(&mut password);
    }

    tracing::debug!(
        "Generated password: length={}, classes={:?}, shuffle={}",
        request.length,
        classes,
        request.shuffle
    );

    Ok(password.into_iter().collect())
}

/// Generate one password using the OS random source
pub fn generate_password(request: &GenerationRequest) -> Result<String, GenerationError> {
    generate(request, &mut RngSource::os())
}

/// Uniform draw from an ASCII alphabet
fn pick<R: RandomSource + ?Sized>(source: &mut R, alphabet: &str) -> char {
    let bytes = alphabet.as_bytes();
    char::from(bytes[source.choose_index(bytes.len())])
}

/// Password generator that owns its random source.
///
/// Convenient for presentation layers that generate several passwords in a
/// session. Defaults to the OS CSPRNG.
pub struct PasswordGenerator<R = RngSource<OsRng>> {
    source: R,
}

impl PasswordGenerator {
    /// Create a generator backed by the OS random source
    pub fn new() -> Self {
        Self::with_source(RngSource::os())
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Create a generator with an explicit random source
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> Result<String, GenerationError> {
        generate(request, &mut self.source)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
