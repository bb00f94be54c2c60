/// Contact list operations on the Contacts product
pub mod contacts;
/// Email distribution and survey link operations
pub mod distributions;
/// The asynchronous response export workflow
pub mod exports;
/// Panel and recipient management
pub mod panels;
/// Survey response retrieval and import
pub mod responses;
/// Event subscription operations
pub mod subscriptions;
/// Survey lifecycle operations
pub mod surveys;

pub use contacts::*;
pub use distributions::*;
pub use panels::*;
pub use responses::*;
pub use subscriptions::*;
pub use surveys::*;
