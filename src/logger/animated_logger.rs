use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Stderr spinner for one audit stage. Finishing lines carry the stage's
/// elapsed time.
pub struct AnimatedLogger {
    stage: String,
    started: Option<Instant>,
    spinner: Option<(oneshot::Sender<()>, JoinHandle<()>)>,
}

impl AnimatedLogger {
    pub const fn new(stage: String) -> Self {
        Self {
            stage,
            started: None,
            spinner: None,
        }
    }

    pub fn start(&mut self) {
        let (done_tx, mut done_rx) = oneshot::channel();
        let stage = self.stage.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = &mut done_rx => break,
                    _ = ticker.tick() => {
                        eprint!("\r{} {}...", frame, stage);
                        let _ = std::io::stderr().flush();
                    }
                }
            }
        });

        self.started = Some(Instant::now());
        self.spinner = Some((done_tx, handle));
    }

    /// Stops the spinner and clears its line. Returns the stage's elapsed
    /// seconds, if it was started.
    async fn finish(&mut self) -> Option<f64> {
        if let Some((done_tx, handle)) = self.spinner.take() {
            let _ = done_tx.send(());
            let _ = handle.await;
            eprint!("\r\x1b[K");
        }
        self.started.take().map(|t| t.elapsed().as_secs_f64())
    }

    pub async fn stop(&mut self, final_message: &str) {
        match self.finish().await {
            Some(secs) => eprintln!("✅ {} ({:.1}s)", final_message, secs),
            None => eprintln!("✅ {}", final_message),
        }
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish().await;
        eprintln!("❌ {}", error_message);
    }
}
