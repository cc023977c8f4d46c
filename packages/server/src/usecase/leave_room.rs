//! UseCase: leave a room
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveRoomUseCase::execute() メソッド
//! - ルームからの削除、空ルームの削除、残りのメンバーへの退出通知
//!
//! ### なぜこのテストが必要か
//! - 空のルームがレジストリに残らないことを保証する
//! - 退出した本人には通知が届かないことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：他のメンバーが残る退出、最後のメンバーの退出
//! - 異常系：存在しないルーム・非メンバーの退出

use std::sync::Arc;

use crate::domain::{ConnectionId, LeaveOutcome, MessagePusher, RoomName, RoomRepository};

use super::error::LeaveRoomError;

pub struct LeaveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl LeaveRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Remove `connection` from `room`.
    ///
    /// When the room becomes empty it is deleted; otherwise `notice` is sent
    /// to the remaining members.
    ///
    /// # Returns
    ///
    /// * `Ok(LeaveOutcome)` - Whether the room closed or who remains
    /// * `Err(LeaveRoomError)` - The room is unknown or `connection` is not in
    ///   it. Callers treat this as a no-op.
    pub async fn execute(
        &self,
        room: &RoomName,
        connection: &ConnectionId,
        notice: &str,
    ) -> Result<LeaveOutcome, LeaveRoomError> {
        let outcome = self.repository.remove_member(room, connection).await?;
        tracing::info!("Connection '{}' left room '{}'", connection, room);

        match &outcome {
            LeaveOutcome::RoomClosed => {
                tracing::info!("Room '{}' is now empty and has been closed", room);
            }
            LeaveOutcome::Remaining(members) => {
                let delivered = self.message_pusher.broadcast(members.clone(), notice).await;
                tracing::debug!(
                    "Leave notice for room '{}' delivered to {}/{} members",
                    room,
                    delivered,
                    members.len()
                );
            }
        }

        Ok(outcome)
    }
}
