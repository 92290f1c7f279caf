use std::collections::BTreeMap;
use std::mem;

use serde::{Deserialize, Serialize};

/// Keys of the add-course form fields. Declaration order is render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    CourseName,
    Credits,
    NumLectures,
    Semester,
}

impl FieldKey {
    /// Wire name used for the input's `name` attribute and the posted form.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::CourseName => "course_name",
            FieldKey::Credits => "credits",
            FieldKey::NumLectures => "num_lectures",
            FieldKey::Semester => "semester",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "course_name" => Some(FieldKey::CourseName),
            "credits" => Some(FieldKey::Credits),
            "num_lectures" => Some(FieldKey::NumLectures),
            "semester" => Some(FieldKey::Semester),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        }
    }
}

/// Static metadata for one form field, independent of its current value.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

/// The add-course fields, in render order. Descriptors and validation
/// rules are keyed by the same [`FieldKey`].
pub static FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor {
        key: FieldKey::CourseName,
        label: "Course Name",
        kind: FieldKind::Text,
        placeholder: "e.g. Data Structures",
    },
    FieldDescriptor {
        key: FieldKey::Credits,
        label: "Credits",
        kind: FieldKind::Number,
        placeholder: "e.g. 4",
    },
    FieldDescriptor {
        key: FieldKey::NumLectures,
        label: "Number of Lectures",
        kind: FieldKind::Number,
        placeholder: "e.g. 3",
    },
    FieldDescriptor {
        key: FieldKey::Semester,
        label: "Semester",
        kind: FieldKind::Number,
        placeholder: "e.g. 5",
    },
];

pub fn descriptor(key: FieldKey) -> &'static FieldDescriptor {
    FIELDS
        .iter()
        .find(|d| d.key == key)
        .expect("every field key has a descriptor")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Range,
}

/// Field-scoped, recoverable, rendered inline next to the offending input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Error map from the last validation pass. Empty means submittable.
pub type FieldErrors = BTreeMap<FieldKey, FieldError>;

/// The form's working value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDraft {
    pub course_name: String,
    pub credits: i64,
    pub num_lectures: i64,
    pub semester: i64,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            credits: 0,
            num_lectures: 0,
            semester: 1,
        }
    }
}

impl CourseDraft {
    /// Value echoed back into the input. Number fields render 0 as an
    /// empty input.
    pub fn display_value(&self, key: FieldKey) -> String {
        match key {
            FieldKey::CourseName => self.course_name.clone(),
            FieldKey::Credits => non_zero(self.credits),
            FieldKey::NumLectures => non_zero(self.num_lectures),
            FieldKey::Semester => non_zero(self.semester),
        }
    }
}

fn non_zero(value: i64) -> String {
    match value {
        0 => String::new(),
        v => v.to_string(),
    }
}

/// A draft that has passed validation, ready for the course store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
    pub credits: i64,
    pub num_lectures: i64,
    pub semester: i64,
}

/// Checks each field independently; no cross-field rules. Pure, so it is
/// safe to re-run on every edit.
pub fn validate(draft: &CourseDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.course_name.is_empty() {
        errors.insert(
            FieldKey::CourseName,
            FieldError {
                kind: ErrorKind::Required,
                message: "Course name is required",
            },
        );
    }
    if draft.credits < 1 {
        errors.insert(
            FieldKey::Credits,
            FieldError {
                kind: ErrorKind::Range,
                message: "Credits required",
            },
        );
    }
    if draft.num_lectures < 1 {
        errors.insert(
            FieldKey::NumLectures,
            FieldError {
                kind: ErrorKind::Range,
                message: "Number of lectures required",
            },
        );
    }
    if !(1..=8).contains(&draft.semester) {
        errors.insert(
            FieldKey::Semester,
            FieldError {
                kind: ErrorKind::Range,
                message: "Semester must be 1–8",
            },
        );
    }
    errors
}

/// Form state: the working draft plus the error map from the last
/// validation pass. A default form is pristine, so no errors are shown
/// even though the default draft would not validate.
#[derive(Clone, Debug, Default)]
pub struct CourseForm {
    pub draft: CourseDraft,
    pub errors: FieldErrors,
}

impl CourseForm {
    /// Stores one raw input value and re-validates the whole draft.
    /// Number-kind fields are coerced leniently: anything that fails to
    /// parse as an integer (including the empty string) becomes 0. That
    /// is not a validation failure in itself; the range checks decide.
    pub fn set_field(&mut self, key: FieldKey, raw: &str) {
        match key {
            FieldKey::CourseName => self.draft.course_name = raw.to_string(),
            FieldKey::Credits => self.draft.credits = coerce_int(raw),
            FieldKey::NumLectures => self.draft.num_lectures = coerce_int(raw),
            FieldKey::Semester => self.draft.semester = coerce_int(raw),
        }
        self.errors = validate(&self.draft);
    }

    /// Validates the full draft. On success the record is handed out and
    /// the form resets to defaults; on failure the draft is untouched
    /// and the error map is left for rendering.
    pub fn submit(&mut self) -> Option<NewCourse> {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }
        let CourseDraft {
            course_name,
            credits,
            num_lectures,
            semester,
        } = mem::take(&mut self.draft);
        Some(NewCourse {
            course_name,
            credits,
            num_lectures,
            semester,
        })
    }
}

fn coerce_int(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CourseDraft {
        CourseDraft {
            course_name: "Data Structures".to_string(),
            credits: 4,
            num_lectures: 3,
            semester: 5,
        }
    }

    fn filled_form() -> CourseForm {
        let mut form = CourseForm::default();
        form.set_field(FieldKey::CourseName, "Data Structures");
        form.set_field(FieldKey::Credits, "4");
        form.set_field(FieldKey::NumLectures, "3");
        form.set_field(FieldKey::Semester, "5");
        form
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn each_violation_is_reported_for_that_field_only() {
        let mut draft = valid_draft();
        draft.course_name = String::new();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FieldKey::CourseName].kind, ErrorKind::Required);

        let mut draft = valid_draft();
        draft.num_lectures = 0;
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FieldKey::NumLectures].kind, ErrorKind::Range);
    }

    #[test]
    fn credits_boundary_is_one() {
        let mut draft = valid_draft();
        draft.credits = 0;
        assert_eq!(validate(&draft)[&FieldKey::Credits].kind, ErrorKind::Range);
        draft.credits = 1;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn semester_bounds_are_inclusive() {
        let mut draft = valid_draft();
        for semester in [1, 8] {
            draft.semester = semester;
            assert!(validate(&draft).is_empty());
        }
        for semester in [0, 9] {
            draft.semester = semester;
            assert_eq!(
                validate(&draft)[&FieldKey::Semester].kind,
                ErrorKind::Range
            );
        }
    }

    #[test]
    fn non_numeric_input_coerces_to_zero_and_revalidates() {
        let mut form = CourseForm::default();
        form.set_field(FieldKey::Credits, "four");
        assert_eq!(form.draft.credits, 0);
        assert_eq!(form.errors[&FieldKey::Credits].kind, ErrorKind::Range);

        form.set_field(FieldKey::NumLectures, "");
        assert_eq!(form.draft.num_lectures, 0);
        assert_eq!(form.errors[&FieldKey::NumLectures].kind, ErrorKind::Range);
    }

    #[test]
    fn submit_emits_record_and_resets() {
        let mut form = filled_form();
        let course = form.submit().expect("filled form should submit");
        assert_eq!(
            course,
            NewCourse {
                course_name: "Data Structures".to_string(),
                credits: 4,
                num_lectures: 3,
                semester: 5,
            }
        );
        assert_eq!(form.draft, CourseDraft::default());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn submit_with_empty_name_is_rejected_without_reset() {
        let mut form = filled_form();
        form.set_field(FieldKey::CourseName, "");
        assert!(form.submit().is_none());
        assert_eq!(form.errors[&FieldKey::CourseName].kind, ErrorKind::Required);
        // rest of the draft stays as entered
        assert_eq!(form.draft.credits, 4);
        assert_eq!(form.draft.semester, 5);
    }

    #[test]
    fn pristine_form_shows_no_errors() {
        let form = CourseForm::default();
        assert!(form.errors.is_empty());
        assert_eq!(form.draft, CourseDraft::default());
    }

    #[test]
    fn zero_renders_as_empty_input_value() {
        let draft = CourseDraft::default();
        assert_eq!(draft.display_value(FieldKey::Credits), "");
        assert_eq!(draft.display_value(FieldKey::NumLectures), "");
        assert_eq!(draft.display_value(FieldKey::Semester), "1");
        assert_eq!(draft.display_value(FieldKey::CourseName), "");
    }

    #[test]
    fn descriptor_lookup_matches_table_order() {
        let keys: Vec<_> = FIELDS.iter().map(|d| d.key).collect();
        assert_eq!(
            keys,
            vec![
                FieldKey::CourseName,
                FieldKey::Credits,
                FieldKey::NumLectures,
                FieldKey::Semester,
            ]
        );
        assert_eq!(descriptor(FieldKey::Credits).kind, FieldKind::Number);
        assert_eq!(descriptor(FieldKey::CourseName).kind, FieldKind::Text);
    }
}
