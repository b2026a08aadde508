mod authenticate;
mod password;
mod register;
mod service;

pub use authenticate::AuthenticateCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
