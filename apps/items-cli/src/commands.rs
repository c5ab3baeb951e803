use items_client::{CreateItem, ItemsClient, UpdateItem};
use serde::Serialize;

use crate::cli::Command;

/// Run `command` against the API and render the response as pretty JSON.
pub async fn execute(client: &ItemsClient, command: Command) -> eyre::Result<String> {
    match command {
        Command::Health => render(&client.health().await?),
        Command::List => render(&client.list_items().await?),
        Command::Get { id } => render(&client.get_item(id).await?),
        Command::Create { name, description } => {
            render(&client.create_item(&CreateItem::new(name, description)).await?)
        }
        Command::Update {
            id,
            name,
            description,
        } => render(
            &client
                .update_item(id, &UpdateItem::new(name, description))
                .await?,
        ),
        Command::Delete { id } => render(&client.delete_item(id).await?),
    }
}

fn render<T: Serialize>(value: &T) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
