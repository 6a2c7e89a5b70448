pub mod business;
pub mod login;
pub mod register;
pub mod verify;

mod render;
mod run;

#[derive(Debug)]
pub enum Action {
    Register(register::Args),
    Verify(verify::Args),
    Login(login::Args),
    Businesses(business::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the client cannot be built or the flow ends in a failure.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
