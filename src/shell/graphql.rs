use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::cart::use_cases::add_product::inbound::graphql::AddProductMutation;
use crate::modules::cart::use_cases::drain_notifications::inbound::graphql::DrainNotificationsMutation;
use crate::modules::cart::use_cases::remove_product::inbound::graphql::RemoveProductMutation;
use crate::modules::cart::use_cases::update_product_amount::inbound::graphql::UpdateProductAmountMutation;
use crate::modules::cart::use_cases::view_cart::inbound::graphql::ViewCartQuery;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ViewCartQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddProductMutation,
    RemoveProductMutation,
    UpdateProductAmountMutation,
    DrainNotificationsMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
