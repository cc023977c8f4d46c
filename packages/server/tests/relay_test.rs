//! End-to-end tests: a relay server on an ephemeral port driven by real
//! WebSocket clients.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use roomrelay_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository,
    },
    ui::{Server, ServerConfig},
};
use serde_json::{Value, json};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::oneshot,
};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Helper struct to manage the in-process server lifecycle
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: addr.port(),
            outbound_capacity: 16,
        };
        let server = Server::new(
            Arc::new(InMemoryRoomRepository::default()),
            Arc::new(WebSocketMessagePusher::new()),
            config,
        );

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        TestServer {
            addr,
            shutdown: Some(tx),
        }
    }

    async fn connect(&self) -> Client {
        self.connect_path("/").await
    }

    async fn connect_path(&self, path: &str) -> Client {
        let url = format!("ws://{}{}", self.addr, path);
        let (ws, _response) = connect_async(url).await.unwrap();
        ws
    }

    fn http(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Member count of `room`, `None` if the room does not exist
    async fn member_count(&self, room: &str) -> Option<usize> {
        let response = reqwest::get(self.http(&format!("/api/rooms/{room}")))
            .await
            .unwrap();
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return None;
        }
        let body: Value = response.json().await.unwrap();
        body["members"].as_array().map(Vec::len)
    }

    /// Poll the HTTP API until `room` reaches the expected member count
    async fn wait_for_members(&self, room: &str, expected: Option<usize>) {
        for _ in 0..100 {
            if self.member_count(room).await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("room '{room}' never reached {expected:?} members");
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn join(room: &str) -> Message {
    Message::text(json!({"type": "join", "payload": {"roomName": room}}).to_string())
}

/// Next text frame, failing after a timeout
async fn recv_text(ws: &mut Client) -> String {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("timed out waiting for a message")
            .expect("stream ended")
            .expect("websocket error");
        if let Message::Text(text) = msg {
            return text.as_str().to_string();
        }
    }
}

/// Assert nothing arrives for a short while
async fn assert_silent(ws: &mut Client) {
    let result = tokio::time::timeout(Duration::from_millis(200), ws.next()).await;
    assert!(result.is_err(), "unexpected message: {result:?}");
}

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let body: Value = reqwest::get(server.http("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_join_notice_and_chat_relay() {
    // テスト項目: 二人目の参加は一人目にだけ通知され、チャットは送信者以外にそのまま届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    let mut y = server.connect().await;
    x.send(join("r1")).await.unwrap();
    server.wait_for_members("r1", Some(1)).await;

    // when (操作): Y が参加
    y.send(join("r1")).await.unwrap();

    // then (期待する結果): X にだけ参加通知
    let notice: Value = serde_json::from_str(&recv_text(&mut x).await).unwrap();
    assert_eq!(
        notice,
        json!({"type": "info", "payload": {"text": "A new user has joined."}})
    );
    assert_silent(&mut y).await;

    // when (操作): X がチャットを送信
    let chat = r#"{"type":"chat","payload":{"text":"hi"}}"#;
    x.send(Message::text(chat)).await.unwrap();

    // then (期待する結果): Y に同じテキストが届き、X には届かない
    assert_eq!(recv_text(&mut y).await, chat);
    assert_silent(&mut x).await;
}

#[tokio::test]
async fn test_disconnect_notifies_and_last_leave_closes_room() {
    // テスト項目: 切断で残りのメンバーに退出通知が届き、最後の切断でルームが消える
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    let mut y = server.connect().await;
    x.send(join("r1")).await.unwrap();
    server.wait_for_members("r1", Some(1)).await;
    y.send(join("r1")).await.unwrap();
    recv_text(&mut x).await; // join notice

    // when (操作): X が正常に切断
    x.close(None).await.unwrap();

    // then (期待する結果):
    let notice: Value = serde_json::from_str(&recv_text(&mut y).await).unwrap();
    assert_eq!(notice["payload"]["text"], "A user has left.");
    server.wait_for_members("r1", Some(1)).await;

    // when (操作): Y が突然切断（クローズフレームなし）
    drop(y);

    // then (期待する結果): ルームが消える
    server.wait_for_members("r1", None).await;
    let rooms: Value = reqwest::get(server.http("/api/rooms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rooms, json!([]));
}

#[tokio::test]
async fn test_messages_before_join_are_ignored() {
    // テスト項目: 参加前のメッセージは配送されず、接続も切られない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut member = server.connect().await;
    let mut outsider = server.connect().await;
    member.send(join("r1")).await.unwrap();
    server.wait_for_members("r1", Some(1)).await;

    // when (操作):
    outsider
        .send(Message::text(r#"{"type":"chat","payload":{"text":"early"}}"#))
        .await
        .unwrap();

    // then (期待する結果):
    assert_silent(&mut member).await;
    outsider.send(join("r1")).await.unwrap();
    server.wait_for_members("r1", Some(2)).await;
}

#[tokio::test]
async fn test_malformed_frames_keep_connection_open() {
    // テスト項目: 解析できないテキストやバイナリを送っても接続は維持される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect_path("/ws").await;

    // when (操作):
    x.send(Message::text("not json")).await.unwrap();
    x.send(Message::binary(vec![1u8, 2, 3])).await.unwrap();
    x.send(Message::text(r#"{"type":"join","payload":{}}"#))
        .await
        .unwrap();
    x.send(join("r1")).await.unwrap();

    // then (期待する結果):
    server.wait_for_members("r1", Some(1)).await;
}

#[tokio::test]
async fn test_room_listing_reports_members() {
    // テスト項目: ルーム一覧に名前・人数・作成時刻が含まれる
    // given (前提条件):
    let server = TestServer::start().await;
    let mut a = server.connect().await;
    let mut b = server.connect().await;
    a.send(join("beta")).await.unwrap();
    b.send(join("alpha")).await.unwrap();
    server.wait_for_members("alpha", Some(1)).await;
    server.wait_for_members("beta", Some(1)).await;

    // when (操作):
    let rooms: Value = reqwest::get(server.http("/api/rooms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["name"], "alpha");
    assert_eq!(rooms[1]["name"], "beta");
    assert_eq!(rooms[0]["member_count"], 1);
    assert!(rooms[0]["created_at"].as_str().unwrap().ends_with('Z'));
}
