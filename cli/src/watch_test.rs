use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use gatewire::{Backoff, ChannelMessage, ChannelScope, GateState, TriggerAction, decode, encode};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot, watch};
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use super::*;

fn fast_backoff() -> Backoff {
    Backoff::new(Duration::from_millis(10), Duration::from_millis(40))
}

fn status_frame(state: GateState) -> Message {
    Message::Text(encode(&ChannelMessage::Status(state)).into())
}

async fn listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    (listener, format!("ws://{addr}"))
}

#[test]
fn socket_url_carries_scope() {
    let watcher = StatusWatcher::new(&ChannelScope::TempLink("abc".to_owned()), "wss://gate.skola.sk");
    assert_eq!(watcher.url(), "wss://gate.skola.sk/ws/gate/?temp_access_link=abc");
}

#[tokio::test]
async fn watcher_reconnects_after_server_closes() {
    let (listener, base) = listener().await;
    let (keep_open_tx, keep_open_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("first accept");
        let mut ws = accept_async(tcp).await.expect("first handshake");
        ws.send(status_frame(GateState::OpenV)).await.expect("send open_v");
        ws.close(None).await.expect("close first");
        drop(ws);

        let (tcp, _) = listener.accept().await.expect("second accept");
        let mut ws = accept_async(tcp).await.expect("second handshake");
        ws.send(status_frame(GateState::Closed)).await.expect("send closed");
        let _ = keep_open_rx.await;
    });

    let (states_tx, mut states_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher = StatusWatcher::with_backoff(&ChannelScope::Token("t".to_owned()), &base, fast_backoff());
    let running = tokio::spawn(watcher.run(shutdown_rx, move |state| {
        let _ = states_tx.send(state);
    }));

    let first = tokio::time::timeout(Duration::from_secs(5), states_rx.recv()).await.expect("first state");
    let second = tokio::time::timeout(Duration::from_secs(5), states_rx.recv()).await.expect("second state");
    assert_eq!(first, Some(GateState::OpenV));
    assert_eq!(second, Some(GateState::Closed));

    shutdown_tx.send(true).expect("signal shutdown");
    tokio::time::timeout(Duration::from_secs(5), running)
        .await
        .expect("watcher stops")
        .expect("watcher task");
    let _ = keep_open_tx.send(());
    server.await.expect("server task");
}

#[tokio::test]
async fn shutdown_interrupts_reconnect_loop() {
    let (listener, base) = listener().await;
    drop(listener);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher = StatusWatcher::with_backoff(&ChannelScope::Token("t".to_owned()), &base, fast_backoff());
    let running = tokio::spawn(watcher.run(shutdown_rx, |_| {}));

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown_tx.send(true).expect("signal shutdown");
    tokio::time::timeout(Duration::from_secs(5), running)
        .await
        .expect("watcher stops")
        .expect("watcher task");
}

#[tokio::test]
async fn dropping_the_sender_also_stops_the_watcher() {
    let (listener, base) = listener().await;
    drop(listener);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher = StatusWatcher::with_backoff(&ChannelScope::Token("t".to_owned()), &base, fast_backoff());
    let running = tokio::spawn(watcher.run(shutdown_rx, |_| {}));
    drop(shutdown_tx);

    tokio::time::timeout(Duration::from_secs(5), running)
        .await
        .expect("watcher stops")
        .expect("watcher task");
}

#[tokio::test]
async fn send_trigger_transmits_one_frame() {
    let (listener, base) = listener().await;
    let (frame_tx, frame_rx) = oneshot::channel();

    let server = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(tcp).await.expect("handshake");
        while let Some(Ok(message)) = ws.next().await {
            if let Message::Text(text) = message {
                let _ = frame_tx.send(text.to_string());
                break;
            }
        }
    });

    send_trigger(
        &ChannelScope::TempLink("abc".to_owned()),
        &base,
        TriggerAction::StartPedestrian,
        Duration::from_secs(5),
    )
    .await
    .expect("trigger sent");

    let frame = tokio::time::timeout(Duration::from_secs(5), frame_rx)
        .await
        .expect("frame arrives")
        .expect("frame sent");
    assert_eq!(decode(&frame).expect("decodes"), ChannelMessage::Trigger(TriggerAction::StartPedestrian));
    server.await.expect("server task");
}
