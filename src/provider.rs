use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::Result;

use crate::config::ClientConfig;
use crate::image_lookup;
use crate::model::PlayerData;
use crate::player_fetch;
use crate::state::{Delta, ProviderCommand};

/// Where player profiles and portraits come from. The HTTP implementation is
/// used by the binary; tests plug in canned sources.
pub trait ProfileSource: Send + Sync + 'static {
    fn fetch_player(&self, name: &str) -> Result<PlayerData>;
    fn lookup_thumbnail(&self, name: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    config: ClientConfig,
}

impl HttpProfileSource {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ProfileSource for HttpProfileSource {
    fn fetch_player(&self, name: &str) -> Result<PlayerData> {
        player_fetch::fetch_player_data(&self.config, name)
    }

    fn lookup_thumbnail(&self, name: &str) -> Result<Option<String>> {
        image_lookup::lookup_thumbnail(&self.config, name)
    }
}

/// Runs the fetch worker until the command channel closes.
pub fn spawn_provider<S: ProfileSource>(
    source: S,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()> {
    let source = Arc::new(source);
    thread::spawn(move || {
        while let Some(cmd) = next_command(&cmd_rx, &tx) {
            match cmd {
                ProviderCommand::FetchPlayer { request_id, name } => {
                    run_fetch(&source, &tx, request_id, name);
                }
            }
        }
    })
}

/// Blocks for the next command, then drains the queue so only the newest
/// search runs.
fn next_command(cmd_rx: &Receiver<ProviderCommand>, tx: &Sender<Delta>) -> Option<ProviderCommand> {
    let mut latest = cmd_rx.recv().ok()?;
    let mut skipped = 0usize;
    while let Ok(cmd) = cmd_rx.try_recv() {
        latest = cmd;
        skipped += 1;
    }
    if skipped > 0 {
        let _ = tx.send(Delta::Log(format!(
            "[INFO] Skipped {skipped} superseded search(es)"
        )));
    }
    Some(latest)
}

fn run_fetch<S: ProfileSource>(source: &Arc<S>, tx: &Sender<Delta>, request_id: u64, name: String) {
    match source.fetch_player(&name) {
        Ok(data) => {
            let payload_image = data
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string);
            let lookup_name = data.lookup_name(&name).to_string();
            let _ = tx.send(Delta::PlayerLoaded {
                request_id,
                data: Box::new(data),
            });

            if let Some(url) = payload_image {
                let _ = tx.send(Delta::ThumbnailResolved {
                    request_id,
                    url: Some(url),
                });
                return;
            }
            spawn_thumbnail_lookup(Arc::clone(source), tx.clone(), request_id, lookup_name);
        }
        Err(err) => {
            let _ = tx.send(Delta::PlayerFailed {
                request_id,
                message: format!("{err:#}"),
            });
        }
    }
}

// Failures collapse to "no image"; the page never sees them.
fn spawn_thumbnail_lookup<S: ProfileSource>(
    source: Arc<S>,
    tx: Sender<Delta>,
    request_id: u64,
    name: String,
) {
    thread::spawn(move || {
        let url = source.lookup_thumbnail(&name).ok().flatten();
        let _ = tx.send(Delta::ThumbnailResolved { request_id, url });
    });
}
