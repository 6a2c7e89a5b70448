use super::{business, login, register, verify, Action};
use anyhow::Result;

pub(super) async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Register(args) => register::execute(args).await,
        Action::Verify(args) => verify::execute(args).await,
        Action::Login(args) => login::execute(args).await,
        Action::Businesses(args) => business::execute(args).await,
    }
}
