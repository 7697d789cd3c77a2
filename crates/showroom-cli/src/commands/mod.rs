pub mod list;
pub mod route;
pub mod run;
pub mod show;
