use api::AuthError;
use thiserror::Error;

use crate::view::Screen;

/// Why a controller operation did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The request was made and failed, or never left the form.
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("cannot {action} on the {screen} screen")]
    WrongScreen {
        action: &'static str,
        screen: Screen,
    },

    /// The form already has a request in flight.
    #[error("a request is already in flight")]
    Busy,
}
