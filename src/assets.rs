use anyhow::{Context, Result, anyhow};
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};
use macroquad::color::Color;
use macroquad::texture::{FilterMode, Image, Texture2D};

use crate::app::Cue;
use crate::grid::{CELL_SIZE, MENU_MUSIC_VOLUME};

const SAMPLE_RATE: u32 = 44100;

// Background loop: A minor arpeggio, (frequency Hz, seconds). 0.0 is a rest.
const MUSIC_NOTES: &[(f32, f32)] = &[
    (220.0, 0.25),
    (261.63, 0.25),
    (329.63, 0.25),
    (261.63, 0.25),
    (196.0, 0.25),
    (246.94, 0.25),
    (293.66, 0.25),
    (0.0, 0.25),
];

const APPLE_RED: Color = Color::new(0.9, 0.12, 0.15, 1.0);
const APPLE_SHINE: Color = Color::new(1.0, 0.55, 0.55, 1.0);
const LEAF_GREEN: Color = Color::new(0.1, 0.7, 0.2, 1.0);
const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

fn wav_header(num_samples: u32) -> Vec<u8> {
    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes()); // PCM chunk size
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());
    data
}

/// Mono PCM16 WAV made of consecutive sine notes. Each note fades out over
/// its last tenth so joins don't click.
fn generate_wav_notes(notes: &[(f32, f32)], volume: f32) -> Vec<u8> {
    let counts: Vec<u32> = notes
        .iter()
        .map(|(_, secs)| (secs * SAMPLE_RATE as f32) as u32)
        .collect();
    let mut data = wav_header(counts.iter().sum());

    let amplitude: f32 = volume.clamp(0.0, 1.0) * 0.7;
    for (&(freq, _), &count) in notes.iter().zip(&counts) {
        let fade = (count / 10).max(1);
        for n in 0..count {
            let t = n as f32 / SAMPLE_RATE as f32;
            let envelope = ((count - n) as f32 / fade as f32).min(1.0);
            let wave = (std::f32::consts::TAU * freq * t).sin();
            let sample = (amplitude * envelope * wave * i16::MAX as f32) as i16;
            data.extend_from_slice(&sample.to_le_bytes());
        }
    }
    data
}

fn generate_wav_sine(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    generate_wav_notes(&[(frequency_hz, duration_seconds)], volume)
}

/// A cell-sized apple: red disc, highlight, green leaf.
fn apple_image() -> Image {
    let size = CELL_SIZE as u16;
    let mut image = Image::gen_image_color(size, size, CLEAR);
    let c = size as f32 / 2.0;
    let r = c - 2.0;
    for y in 0..size as u32 {
        for x in 0..size as u32 {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - (c + 1.5);
            if dx * dx + dy * dy <= r * r {
                let shine = (dx + r * 0.4).powi(2) + (dy + r * 0.4).powi(2) <= (r * 0.25).powi(2);
                image.set_pixel(x, y, if shine { APPLE_SHINE } else { APPLE_RED });
            }
        }
    }
    let leaf_x = size as u32 / 2;
    for i in 0..4 {
        image.set_pixel(leaf_x + i, 1 + i / 2, LEAF_GREEN);
        image.set_pixel(leaf_x + i, 2 + i / 2, LEAF_GREEN);
    }
    image
}

async fn sound_from_wav(name: &str, bytes: &[u8]) -> Result<Sound> {
    load_sound_from_bytes(bytes)
        .await
        .map_err(|err| anyhow!("{err:?}"))
        .with_context(|| format!("failed to load {name} sound"))
}

/// Everything the game loads at startup. Dropping it stops the music.
pub struct Assets {
    pub apple: Texture2D,
    eat: Sound,
    crash: Sound,
    music: Sound,
    music_volume: f32,
}

impl Assets {
    pub async fn load() -> Result<Self> {
        let apple = Texture2D::from_image(&apple_image());
        apple.set_filter(FilterMode::Nearest);

        let eat = sound_from_wav("eat", &generate_wav_sine(880.0, 0.08, 0.6)).await?;
        let crash = sound_from_wav("collision", &generate_wav_sine(110.0, 0.25, 0.7)).await?;
        let music = sound_from_wav("music", &generate_wav_notes(MUSIC_NOTES, 0.35)).await?;
        log::info!("assets ready");

        Ok(Self { apple, eat, crash, music, music_volume: MENU_MUSIC_VOLUME })
    }

    pub fn start_music(&self) {
        audio::play_sound(&self.music, PlaySoundParams { looped: true, volume: self.music_volume });
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        if (self.music_volume - volume).abs() > f32::EPSILON {
            self.music_volume = volume;
            audio::set_sound_volume(&self.music, volume);
        }
    }

    pub fn play(&self, cue: Cue) {
        let (sound, volume) = match cue {
            Cue::Eat => (&self.eat, 0.35),
            Cue::Crash => (&self.crash, 0.6),
        };
        audio::play_sound(sound, PlaySoundParams { looped: false, volume });
    }
}

impl Drop for Assets {
    fn drop(&mut self) {
        audio::stop_sound(&self.music);
        log::debug!("assets released");
    }
}
