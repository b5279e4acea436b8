//! Submission files: naming convention, tabular access and validation

mod metadata;
mod tabular;
mod validator;

pub use metadata::{BaseTask, FILENAME_PREFIX, SubmissionMetadata, TaskName, companion_stem};
pub use tabular::{
    DistanceRow, FILE_COLUMN, LABEL_COLUMN, Label, LabelRow, LabelTable, is_na, read_distances,
    read_header,
};
pub use validator::{
    DEFAULT_EXTENSION, RejectReason, Rejection, Submission, SubmissionValidator,
    ValidationReport,
};

pub(crate) use validator::is_tabular_file;
