//! Search over encrypted course data.
//!
//! Course text is only ever stored encrypted, so there is no index to query:
//! every search loads all courses, decrypts them and filters the plaintext.
//! Cost is linear in the number of courses.

use tracing::instrument;

use coursevault_cipher::{DECRYPTION_FAILED_MARKER, FieldCipher};
use coursevault_core::AppError;
use coursevault_db::{CourseRepository, Store};
use coursevault_models::{Course, CourseView};
use coursevault_observability::track_decryption_failure;

pub struct CourseService;

/// A decrypted field, or `None` if it could not be decrypted.
type Field = Option<String>;

impl CourseService {
    /// Returns the courses whose name or description contains `term`,
    /// ignoring case, in storage order. An absent or empty term matches
    /// every course.
    ///
    /// Fields that fail to decrypt are shown as
    /// [`DECRYPTION_FAILED_MARKER`] and never match a term.
    #[instrument(skip_all, fields(term = ?term))]
    pub async fn search(
        store: &dyn Store,
        cipher: &FieldCipher,
        term: Option<&str>,
    ) -> Result<Vec<CourseView>, AppError> {
        let needle = term.filter(|t| !t.is_empty()).map(str::to_lowercase);
        let courses = store.list_courses().await?;

        let matches = courses
            .iter()
            .filter_map(|course| {
                let (name, description) = decrypt_course(cipher, course);
                let keep = match &needle {
                    None => true,
                    Some(needle) => [&name, &description]
                        .into_iter()
                        .flatten()
                        .any(|text| text.to_lowercase().contains(needle.as_str())),
                };
                keep.then(|| CourseView {
                    id: course.id,
                    name: name.unwrap_or_else(|| DECRYPTION_FAILED_MARKER.to_string()),
                    description: description
                        .unwrap_or_else(|| DECRYPTION_FAILED_MARKER.to_string()),
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(total = courses.len(), matched = matches.len(), "Course search");
        Ok(matches)
    }
}

fn decrypt_course(cipher: &FieldCipher, course: &Course) -> (Field, Field) {
    (
        decrypt_field(cipher, course.id, "name", &course.encrypted_name),
        decrypt_field(cipher, course.id, "description", &course.encrypted_description),
    )
}

fn decrypt_field(cipher: &FieldCipher, course_id: i64, field: &str, ciphertext: &str) -> Field {
    match cipher.decrypt(ciphertext) {
        Ok(plaintext) => Some(plaintext),
        Err(err) => {
            track_decryption_failure();
            tracing::warn!(course_id, field, error = %err, "Failed to decrypt course field");
            None
        }
    }
}
