use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, from_items, to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbPlayerRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbPlayerRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError>;
    async fn get_player(&self, player_id: &str) -> Result<Player, PlayerRepositoryError>;
    async fn list_players(&self) -> Result<Vec<Player>, PlayerRepositoryError>;
    async fn update_player(&self, player: &Player) -> Result<(), PlayerRepositoryError>;
    async fn delete_player(&self, player_id: &str) -> Result<(), PlayerRepositoryError>;
}

#[async_trait]
impl PlayerRepository for DynamoDbPlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let item =
            to_item(player).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    PlayerRepositoryError::AlreadyExists
                } else {
                    PlayerRepositoryError::DynamoDb(service_error.to_string())
                }
            })?;
        Ok(())
    }

    async fn get_player(&self, player_id: &str) -> Result<Player, PlayerRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "id",
                to_attribute_value(player_id)
                    .map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;
        if let Some(item) = output.item {
            let player: Player =
                from_item(item).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;
            Ok(player)
        } else {
            Err(PlayerRepositoryError::NotFound)
        }
    }

    async fn list_players(&self) -> Result<Vec<Player>, PlayerRepositoryError> {
        let items: Result<Vec<_>, _> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .collect()
            .await;
        let items = items.map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;
        from_items(items).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))
    }

    async fn update_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let item =
            to_item(player).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    PlayerRepositoryError::NotFound
                } else {
                    PlayerRepositoryError::DynamoDb(service_error.to_string())
                }
            })?;
        Ok(())
    }

    async fn delete_player(&self, player_id: &str) -> Result<(), PlayerRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                "id",
                to_attribute_value(player_id)
                    .map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?,
            )
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    PlayerRepositoryError::NotFound
                } else {
                    PlayerRepositoryError::DynamoDb(service_error.to_string())
                }
            })?;
        Ok(())
    }
}
