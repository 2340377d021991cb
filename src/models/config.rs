use std::env;
use std::time::Duration;

pub const DEFAULT_REVEAL_SECONDS: u32 = 5;
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct GameConfig {
    // カードを表示しておく秒数
    pub reveal_seconds: u32,
    // カウントダウンの刻み
    pub tick_interval: Duration,
    // 乱数のシード（テストや再現用）
    pub rng_seed: Option<u64>,
    // 組み込みの単語リストを置き換える
    pub words: Option<Vec<String>>,
    pub verbose_logging: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_seconds: DEFAULT_REVEAL_SECONDS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MILLIS),
            rng_seed: None,
            words: None,
            verbose_logging: cfg!(debug_assertions),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let reveal_seconds = env::var("IMPOSTOR_REVEAL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REVEAL_SECONDS);
        let tick_millis = env::var("IMPOSTOR_TICK_MILLIS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|millis| *millis > 0)
            .unwrap_or(DEFAULT_TICK_MILLIS);
        let rng_seed = env::var("IMPOSTOR_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());
        let words = env::var("IMPOSTOR_WORDS")
            .ok()
            .map(|v| parse_word_list(&v))
            .filter(|words| !words.is_empty());
        let verbose_logging = env::var("IMPOSTOR_VERBOSE_LOGGING")
            .map(|v| v == "true")
            .unwrap_or_else(|_| cfg!(debug_assertions));

        Self {
            reveal_seconds,
            tick_interval: Duration::from_millis(tick_millis),
            rng_seed,
            words,
            verbose_logging,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
