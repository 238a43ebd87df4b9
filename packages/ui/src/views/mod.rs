mod loading;
pub use loading::LoadingScreen;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod dashboard;
pub use dashboard::DashboardView;

mod panels;
pub use panels::{AlertsPanel, FamilyPanel, MapPanel, SettingsPanel};

mod shell;
pub use shell::AppShell;
