mod admin;
mod dashboard;
mod games;
mod login;
mod my_games;
mod register;
mod statistics;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use games::Games;
pub use login::Login;
pub use my_games::MyGames;
pub use register::Register;
pub use statistics::Statistics;
