//! UseCase: relay an envelope to the other members of a room
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 送信者自身には決して配送されないことを保証する
//! - 存在しないルームへのブロードキャストが何もしないことを確認する

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomName, RoomRepository};

pub struct BroadcastUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl BroadcastUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Deliver `content` to every member of `room` except `sender`.
    ///
    /// Returns the number of members the content was queued for. An unknown
    /// room has no members, so nothing is sent.
    pub async fn execute(&self, room: &RoomName, sender: &ConnectionId, content: &str) -> usize {
        let targets = self.repository.members_except(room, sender).await;
        if targets.is_empty() {
            return 0;
        }
        self.message_pusher.broadcast(targets, content).await
    }
}
