//! Errors - シミュレーションのエラー型
//!
//! 入力はすべて内部生成なので、失敗するのは設定値の不正と
//! 生成手続きの打ち切り（retry 上限つきのときだけ）くらいです。

/// SimError は core crate のすべての失敗を表す
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// 上限つきの value set 生成で、条件を満たす候補が見つからなかった
    #[error("value set generation gave up after {attempts} attempts")]
    ValueSetExhausted { attempts: u64 },

    #[error("game {0} is not in the game table")]
    UnknownGame(String),

    #[error("decision option '{feature}' matches no item in game {game}")]
    MissingTrueValue { feature: String, game: u32 },

    #[error("item label '{0}' is not of the form <Type>_<Color>")]
    MalformedItem(String),

    #[error("result sink failed: {0}")]
    Sink(String),
}
