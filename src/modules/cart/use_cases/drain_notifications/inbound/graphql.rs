use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::infrastructure::notifier::Notification;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNotification {
    pub severity: String,
    pub message: String,
}

impl From<Notification> for GqlNotification {
    fn from(n: Notification) -> Self {
        Self {
            severity: n.severity.as_str().to_string(),
            message: n.message,
        }
    }
}

#[derive(Default)]
pub struct DrainNotificationsMutation;

#[Object]
impl DrainNotificationsMutation {
    async fn drain_notifications(&self, context: &Context<'_>) -> GqlResult<Vec<GqlNotification>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .notifications
            .drain()
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
