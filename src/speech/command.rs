use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use super::{SpeechAdapter, VoiceDescriptor};
use crate::error::SpeechError;

/// Supported synthesizer command-line conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthProgram {
    /// espeak-ng / espeak
    Espeak(String),
    /// macOS `say`
    Say,
}

impl SynthProgram {
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Say
        } else {
            Self::Espeak("espeak-ng".to_string())
        }
    }

    /// Anything other than `say` is driven with espeak flags
    pub fn from_name(name: &str) -> Self {
        match name {
            "say" => Self::Say,
            other => Self::Espeak(other.to_string()),
        }
    }

    pub fn binary(&self) -> &str {
        match self {
            Self::Espeak(bin) => bin,
            Self::Say => "say",
        }
    }

    /// Arguments for one utterance; the text itself is written to stdin
    pub fn utterance_args(&self, voice: Option<&VoiceDescriptor>, rate: Option<u32>) -> Vec<String> {
        let mut args = Vec::new();
        match self {
            Self::Espeak(_) => {
                // espeak selects voices by language identifier
                if let Some(voice) = voice {
                    args.push("-v".to_string());
                    args.push(voice.lang.clone());
                }
                if let Some(rate) = rate {
                    args.push("-s".to_string());
                    args.push(rate.to_string());
                }
                args.push("--stdin".to_string());
            }
            Self::Say => {
                if let Some(voice) = voice {
                    args.push("-v".to_string());
                    args.push(voice.name.clone());
                }
                if let Some(rate) = rate {
                    args.push("-r".to_string());
                    args.push(rate.to_string());
                }
                args.push("-f".to_string());
                args.push("-".to_string());
            }
        }
        args
    }

    fn voice_list_args(&self) -> &'static [&'static str] {
        match self {
            Self::Espeak(_) => &["--voices"],
            Self::Say => &["-v", "?"],
        }
    }

    pub fn parse_voices(&self, output: &str) -> Vec<VoiceDescriptor> {
        match self {
            Self::Espeak(_) => parse_espeak_voices(output),
            Self::Say => parse_say_voices(output),
        }
    }

    fn probe(&self) -> bool {
        let args: &[&str] = match self {
            Self::Espeak(_) => &["--version"],
            Self::Say => &["-v", "?"],
        };
        Command::new(self.binary())
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

struct Utterance {
    text: String,
    voice: Option<VoiceDescriptor>,
}

/// Speech through an external synthesizer program.
///
/// A single worker thread runs one synthesizer process per utterance, so
/// utterances play back to back in submission order. Dropping the adapter
/// closes the queue and waits for the remaining utterances.
pub struct CommandSpeech {
    program: SynthProgram,
    supported: bool,
    queue: Option<Sender<Utterance>>,
    worker: Option<JoinHandle<()>>,
}

impl CommandSpeech {
    pub fn new(program: SynthProgram, rate: Option<u32>) -> Self {
        let supported = program.probe();
        if !supported {
            tracing::warn!("Synthesizer '{}' not available", program.binary());
            return Self {
                program,
                supported,
                queue: None,
                worker: None,
            };
        }

        tracing::info!("Speech synthesizer initialized: {}", program.binary());
        let (tx, rx) = mpsc::channel::<Utterance>();
        let worker_program = program.clone();
        let worker = std::thread::spawn(move || {
            for utterance in rx {
                if let Err(e) = run_utterance(&worker_program, &utterance, rate) {
                    tracing::warn!("Failed to speak utterance: {}", e);
                }
            }
            tracing::debug!("Speech queue drained");
        });

        Self {
            program,
            supported,
            queue: Some(tx),
            worker: Some(worker),
        }
    }

    pub fn program(&self) -> &SynthProgram {
        &self.program
    }
}

fn run_utterance(
    program: &SynthProgram,
    utterance: &Utterance,
    rate: Option<u32>,
) -> Result<(), SpeechError> {
    let mut child = Command::new(program.binary())
        .args(program.utterance_args(utterance.voice.as_ref(), rate))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(utterance.text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }
    }
    let status = child.wait()?;
    if !status.success() {
        return Err(SpeechError::Backend(format!(
            "{} exited with {}",
            program.binary(),
            status
        )));
    }
    Ok(())
}

impl SpeechAdapter for CommandSpeech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError> {
        let queue = self.queue.as_ref().ok_or(SpeechError::Unsupported)?;
        tracing::debug!("Queueing utterance ({} chars)", text.len());
        queue
            .send(Utterance {
                text: text.to_string(),
                voice: voice.cloned(),
            })
            .map_err(|e| SpeechError::Queue(e.to_string()))
    }

    fn list_voices(&self) -> Vec<VoiceDescriptor> {
        if !self.supported {
            return Vec::new();
        }
        match Command::new(self.program.binary())
            .args(self.program.voice_list_args())
            .output()
        {
            Ok(output) => self.program.parse_voices(&String::from_utf8_lossy(&output.stdout)),
            Err(e) => {
                tracing::warn!("Failed to list voices: {}", e);
                Vec::new()
            }
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.queue.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Speech worker panicked");
            }
        }
    }
}

/// Parse `espeak-ng --voices`:
/// `Pty Language Age/Gender VoiceName File Other Languages`
pub fn parse_espeak_voices(output: &str) -> Vec<VoiceDescriptor> {
    output
        .lines()
        .skip_while(|line| !line.trim_start().starts_with("Pty"))
        .skip(1)
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < 4 {
                return None;
            }
            Some(VoiceDescriptor {
                name: cols[3].to_string(),
                lang: cols[1].to_string(),
            })
        })
        .collect()
}

/// Parse `say -v ?`: `<name> <locale> # <sample sentence>`; names may contain spaces
pub fn parse_say_voices(output: &str) -> Vec<VoiceDescriptor> {
    output
        .lines()
        .filter_map(|line| {
            let head = line.split('#').next()?.trim();
            let (name, lang) = head.rsplit_once(char::is_whitespace)?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(VoiceDescriptor {
                name: name.to_string(),
                lang: lang.to_string(),
            })
        })
        .collect()
}
