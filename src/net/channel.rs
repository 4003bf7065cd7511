//! Reconnecting gate status channel for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`GateChannel`] is provided by the root component for signed-in users
//! and the guest screen creates its own, scoped to a temporary-access link.
//! Screens read [`GateChannel::view`] and call [`GateChannel::send`]; they
//! never touch the socket.
//!
//! LIFECYCLE
//! =========
//! `connect` starts a run: a local task looping `connect -> pump frames ->
//! closed -> sleep(backoff)`. Every decision is taken by the run's
//! `ChannelMachine`. `close` disposes that machine and drops the outbound
//! sender, which ends the frame pump; a backoff sleep that wakes afterwards
//! finds the machine disposed and returns instead of opening a socket.
//!
//! ERROR HANDLING
//! ==============
//! Socket failures only feed the reconnect loop. Triggers sent while the
//! socket is not open are logged and reported as `SendError`, never queued.

use std::cell::RefCell;
use std::rc::Rc;

use gatewire::{ChannelMachine, ChannelScope, ChannelStatus, GateState, SendError, TriggerAction};
use leptos::prelude::*;

use crate::state::gate::GateView;

/// Copyable handle to the status channel, shared through context.
#[derive(Clone, Copy)]
pub struct GateChannel {
    view: RwSignal<GateView>,
    run: StoredValue<Option<Run>, LocalStorage>,
}

/// State shared between a handle and the task driving one connection run.
#[derive(Clone)]
struct Run {
    machine: Rc<RefCell<ChannelMachine>>,
    #[cfg(feature = "csr")]
    outbound: Rc<RefCell<Option<futures::channel::mpsc::UnboundedSender<String>>>>,
}

impl Run {
    fn new() -> Self {
        Self {
            machine: Rc::new(RefCell::new(ChannelMachine::default())),
            #[cfg(feature = "csr")]
            outbound: Rc::new(RefCell::new(None)),
        }
    }

    #[cfg(feature = "csr")]
    fn snapshot(&self) -> GateView {
        let machine = self.machine.borrow();
        GateView { gate: machine.gate(), connection: machine.status() }
    }

    fn send(&self, action: TriggerAction) -> Result<(), SendError> {
        let text = self.machine.borrow().outbound(action)?;
        #[cfg(feature = "csr")]
        {
            let outbound = self.outbound.borrow();
            let sender = outbound.as_ref().ok_or(SendError::NotOpen(ChannelStatus::Closed))?;
            sender
                .unbounded_send(text)
                .map_err(|_| SendError::NotOpen(ChannelStatus::Closed))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Ok(())
        }
    }

    fn dispose(&self) {
        self.machine.borrow_mut().dispose();
        #[cfg(feature = "csr")]
        self.outbound.borrow_mut().take();
    }
}

impl Default for GateChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl GateChannel {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(GateView::default()),
            run: StoredValue::new_local(None),
        }
    }

    /// Observable gate state and connection status.
    pub fn view(self) -> RwSignal<GateView> {
        self.view
    }

    /// Start a new connection run for `scope`, disposing any previous one.
    pub fn connect(self, scope: ChannelScope) {
        self.close();
        let run = Run::new();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(run_loop(scope, run.clone(), self.view));
        #[cfg(not(feature = "csr"))]
        let _ = scope;
        let _ = self.run.try_set_value(Some(run));
    }

    /// Transmit a trigger if, and only if, the socket is open right now.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::NotOpen`] otherwise; nothing is sent.
    pub fn send(self, action: TriggerAction) -> Result<(), SendError> {
        let result = self
            .run
            .try_with_value(|run| match run {
                Some(run) => run.send(action),
                None => Err(SendError::NotOpen(ChannelStatus::Disposed)),
            })
            .unwrap_or(Err(SendError::NotOpen(ChannelStatus::Disposed)));
        if let Err(err) = &result {
            leptos::logging::warn!("dropping {action} trigger: {err}");
        }
        result
    }

    /// Dispose the current run. Safe to call repeatedly and during cleanup.
    pub fn close(self) {
        let _ = self.run.try_update_value(|run| {
            if let Some(run) = run.take() {
                run.dispose();
            }
        });
        let _ = self.view.try_set(GateView { gate: GateState::Unknown, connection: ChannelStatus::Disposed });
    }
}

/// Push the machine's state to the view. Returns `false` once the view is
/// gone, in which case the run is disposed.
#[cfg(feature = "csr")]
fn publish(run: &Run, view: RwSignal<GateView>) -> bool {
    let current = run.snapshot();
    if view.try_set(current).is_some() {
        run.dispose();
        return false;
    }
    true
}

#[cfg(feature = "csr")]
async fn run_loop(scope: ChannelScope, run: Run, view: RwSignal<GateView>) {
    let url = scope.socket_url(&crate::config::socket_base());
    loop {
        let started = run.machine.borrow_mut().begin_connect();
        if !started || !publish(&run, view) {
            break;
        }
        if let Err(err) = connect_and_run(&url, &run, view).await {
            leptos::logging::warn!("gate channel error: {err}");
        }
        let delay = run.machine.borrow_mut().closed();
        let Some(delay) = delay else {
            break;
        };
        if !publish(&run, view) {
            break;
        }
        leptos::logging::log!("gate channel closed, reconnecting in {}ms", delay.as_millis());
        gloo_timers::future::sleep(delay).await;
    }
}

/// Open one socket and pump frames until it closes or the run is disposed.
#[cfg(feature = "csr")]
async fn connect_and_run(url: &str, run: &Run, view: RwSignal<GateView>) -> Result<(), String> {
    use std::pin::Pin;

    use futures::{Sink, SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    futures::future::poll_fn(|cx| Sink::<Message>::poll_ready(Pin::new(&mut ws), cx))
        .await
        .map_err(|e| e.to_string())?;
    if !matches!(ws.state(), State::Open) {
        return Err("socket closed before opening".to_owned());
    }
    let opened = run.machine.borrow_mut().opened();
    if !opened {
        return Ok(());
    }

    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    *run.outbound.borrow_mut() = Some(tx);
    if !publish(run, view) {
        return Ok(());
    }

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    let received = run.machine.borrow_mut().receive_text(&text);
                    match received {
                        Ok(Some(_)) => {
                            if !publish(run, view) {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(err) => leptos::logging::warn!("ignoring gate frame: {err}"),
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(err) => {
                    leptos::logging::warn!("gate channel receive error: {err}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    run.outbound.borrow_mut().take();
    Ok(())
}
