pub mod clock;
pub mod controller;
pub mod date_math;
pub mod paths;
pub mod record_store;
pub mod renderer;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{Event, Transition, ViewController, ViewMode};
pub use record_store::RecordStore;
pub use renderer::{project, DisplayRow, TABLE_HEADERS};
pub use validator::{build_record, validate, FieldStatus, ValidationReport};
