pub mod dispatch;
pub mod extract;
pub mod history;
pub mod run;
pub mod schema;
pub mod shared;
pub mod signature;
