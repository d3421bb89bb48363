use async_graphql::{Context, Object, Result as GqlResult};
use tracing::error;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::ApplicationError;
use crate::shared::core::email::Email;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Returns the confirmation message, e.g. "Signed up ann@x.edu for Chess Club".
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let email = Email::parse(email)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let confirmation = state
            .sign_up_handler
            .handle(SignUpForActivity {
                activity_name,
                email,
            })
            .await
            .map_err(to_graphql_error)?;

        Ok(confirmation.message())
    }
}

fn to_graphql_error(error: ApplicationError) -> async_graphql::Error {
    match error {
        ApplicationError::Domain(_) | ApplicationError::ActivityNotFound(_) => {
            async_graphql::Error::new(error.to_string())
        }
        ApplicationError::Store(_) => {
            error!(error = %error, "signup failed");
            async_graphql::Error::new("Internal server error")
        }
    }
}
