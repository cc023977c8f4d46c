//! UseCase: join a room
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームへの追加と既存メンバーへの参加通知
//!
//! ### なぜこのテストが必要か
//! - 参加者本人には通知が届かないことを保証する
//! - 最初の参加者のときは通知対象が空であることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：空のルームへの参加、既存メンバーがいるルームへの参加
//! - 異常系：同じ接続の二重参加

use std::sync::Arc;

use crate::domain::{ConnectionId, JoinOutcome, MessagePusher, RoomName, RoomRepository};

use super::error::JoinRoomError;

pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Add `connection` to `room` and send `notice` to the members that were
    /// already there.
    ///
    /// # Arguments
    ///
    /// * `room` - Room to join; created if it does not exist
    /// * `connection` - The joining connection
    /// * `notice` - Serialized `info` envelope announcing the new member
    ///
    /// # Returns
    ///
    /// * `Ok(JoinOutcome)` - Whether the room was created and who was notified
    /// * `Err(JoinRoomError)` - The connection was already a member
    pub async fn execute(
        &self,
        room: RoomName,
        connection: ConnectionId,
        notice: &str,
    ) -> Result<JoinOutcome, JoinRoomError> {
        let outcome = self.repository.add_member(room.clone(), connection).await?;

        if outcome.room_created {
            tracing::info!("Room '{}' opened", room);
        }
        tracing::info!("Connection '{}' joined room '{}'", connection, room);

        if !outcome.peers.is_empty() {
            let delivered = self
                .message_pusher
                .broadcast(outcome.peers.clone(), notice)
                .await;
            tracing::debug!(
                "Join notice for room '{}' delivered to {}/{} members",
                room,
                delivered,
                outcome.peers.len()
            );
        }

        Ok(outcome)
    }
}
