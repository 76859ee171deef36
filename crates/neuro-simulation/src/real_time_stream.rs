//! Real-time EEG streaming for live operation without hardware

use crate::eeg_simulator::{EegConfig, EegSimulator, PatternConfig};
use crate::signal_patterns::EegPattern;
use neuro_core::{EegRecording, NeuroResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, Duration, Instant};

/// Configuration for real-time streaming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// EEG simulation configuration
    pub eeg_config: EegConfig,
    /// Chunk duration in seconds (e.g., 2.0 for one processable window)
    pub chunk_duration: f32,
    /// Buffer size for the stream (number of chunks to keep)
    pub buffer_size: usize,
    /// Update rate in Hz (how often to send new data)
    pub update_rate: f32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            eeg_config: EegConfig::default(),
            chunk_duration: 2.0, // One processable window per chunk
            buffer_size: 16,
            update_rate: 0.5, // One chunk every 2 seconds
        }
    }
}

/// Commands for controlling the stream
#[derive(Debug, Clone)]
pub enum StreamCommand {
    Start,
    Stop,
    Pause,
    Resume,
    UpdateConfig(StreamConfig),
    UpdatePattern(EegPattern),
    SetFocusShare(f32),
}

/// Stream statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamStats {
    pub is_running: bool,
    pub chunks_generated: u64,
    pub total_duration: f32,
}

/// Real-time EEG signal stream
pub struct RealTimeEegStream {
    config: StreamConfig,
    simulator: Arc<Mutex<EegSimulator>>,
    data_sender: broadcast::Sender<EegRecording>,
    control_receiver: mpsc::Receiver<StreamCommand>,
    control_sender: mpsc::Sender<StreamCommand>,
    stats: Arc<Mutex<StreamStats>>,
}

impl RealTimeEegStream {
    /// Create new real-time EEG stream
    pub fn new(config: StreamConfig) -> NeuroResult<Self> {
        let simulator = EegSimulator::new(config.eeg_config.clone())?;
        let (data_sender, _) = broadcast::channel(config.buffer_size);
        let (control_sender, control_receiver) = mpsc::channel(32);

        Ok(RealTimeEegStream {
            config,
            simulator: Arc::new(Mutex::new(simulator)),
            data_sender,
            control_receiver,
            control_sender,
            stats: Arc::new(Mutex::new(StreamStats::default())),
        })
    }

    /// Get a receiver for data updates
    pub fn subscribe(&self) -> broadcast::Receiver<EegRecording> {
        self.data_sender.subscribe()
    }

    /// Get control sender for sending commands
    pub fn control_handle(&self) -> mpsc::Sender<StreamCommand> {
        self.control_sender.clone()
    }

    /// Get current stream statistics
    pub async fn stats(&self) -> StreamStats {
        self.stats.lock().await.clone()
    }

    /// Run the streaming loop until the control channel closes
    pub async fn run(&mut self) -> NeuroResult<()> {
        let update_interval = Duration::from_secs_f32(1.0 / self.config.update_rate);
        let mut interval_timer = interval(update_interval);

        println!(
            "EEG stream ready - Update rate: {:.2}Hz, Chunk duration: {:.0}ms",
            self.config.update_rate,
            self.config.chunk_duration * 1000.0
        );

        loop {
            tokio::select! {
                // Handle timer ticks for data generation
                _ = interval_timer.tick() => {
                    let is_running = self.stats.lock().await.is_running;
                    if is_running {
                        let start_time = Instant::now();

                        let chunk = {
                            let mut sim = self.simulator.lock().await;
                            sim.generate_chunk(self.config.chunk_duration)?
                        };

                        let generation_time = start_time.elapsed();

                        {
                            let mut stats = self.stats.lock().await;
                            stats.chunks_generated += 1;
                            stats.total_duration += self.config.chunk_duration;
                        }

                        // Send to subscribers (ignore if no receivers)
                        let _ = self.data_sender.send(chunk);

                        if generation_time.as_millis() > (self.config.chunk_duration * 1000.0) as u128 {
                            println!(
                                "Warning: Chunk generation took {}ms, longer than chunk duration {:.0}ms",
                                generation_time.as_millis(),
                                self.config.chunk_duration * 1000.0
                            );
                        }
                    }
                }

                // Handle control commands
                command = self.control_receiver.recv() => {
                    match command {
                        Some(StreamCommand::Start) => {
                            let mut stats = self.stats.lock().await;
                            stats.is_running = true;
                            stats.chunks_generated = 0;
                            stats.total_duration = 0.0;
                            drop(stats);

                            let mut sim = self.simulator.lock().await;
                            sim.reset_time();
                            println!("EEG stream started");
                        }
                        Some(StreamCommand::Stop) => {
                            self.stats.lock().await.is_running = false;

                            let mut sim = self.simulator.lock().await;
                            sim.reset_time();
                            println!("EEG stream stopped");
                        }
                        Some(StreamCommand::Pause) => {
                            self.stats.lock().await.is_running = false;
                            println!("EEG stream paused");
                        }
                        Some(StreamCommand::Resume) => {
                            self.stats.lock().await.is_running = true;
                            println!("EEG stream resumed");
                        }
                        Some(StreamCommand::UpdateConfig(new_config)) => {
                            {
                                let mut sim = self.simulator.lock().await;
                                sim.update_config(new_config.eeg_config.clone())?;
                            }

                            let new_interval = Duration::from_secs_f32(1.0 / new_config.update_rate);
                            interval_timer = interval(new_interval);
                            self.config = new_config;

                            println!("EEG stream configuration updated");
                        }
                        Some(StreamCommand::UpdatePattern(pattern)) => {
                            self.apply_pattern(pattern).await?;
                            println!("EEG stream pattern updated: {}", pattern.description());
                        }
                        Some(StreamCommand::SetFocusShare(focus)) => {
                            let pattern = EegPattern::Blend { focus, amplitude: 0.6 };
                            self.apply_pattern(pattern).await?;
                            println!("EEG stream focus share set to {:.0}%", focus * 100.0);
                        }
                        None => {
                            println!("EEG stream control channel closed");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    async fn apply_pattern(&mut self, pattern: EegPattern) -> NeuroResult<()> {
        let mut config = self.config.clone();
        config.eeg_config.pattern = PatternConfig::from_pattern(pattern);

        {
            let mut sim = self.simulator.lock().await;
            sim.update_config(config.eeg_config.clone())?;
        }

        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }
}

/// Helper function to create and start a stream in the background
pub async fn start_eeg_stream(
    config: StreamConfig,
) -> NeuroResult<(
    broadcast::Receiver<EegRecording>,
    mpsc::Sender<StreamCommand>,
)> {
    let mut stream = RealTimeEegStream::new(config)?;
    let data_receiver = stream.subscribe();
    let control_sender = stream.control_handle();

    // Start the stream in a background task
    tokio::spawn(async move {
        if let Err(e) = stream.run().await {
            eprintln!("EEG stream error: {}", e);
        }
    });

    Ok((data_receiver, control_sender))
}
