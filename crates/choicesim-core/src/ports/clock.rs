//! Clock port - 時刻の抽象化
//!
//! run manifest の開始・終了時刻と RunId のタイムスタンプに使います。
//! テストでは FixedClock に差し替えて決定的にします。

use chrono::{DateTime, Utc};

/// Clock は現在時刻を提供
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// 本番用（システム時刻）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// テスト用（常に同じ時刻を返す）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
