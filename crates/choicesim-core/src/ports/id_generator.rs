//! IdGenerator port - RunId の生成
//!
//! Clock から取ったミリ秒タイムスタンプとランダム部分で ULID を組み立てます。
//! ランダム部分はシミュレーション用の seeded RNG とは別系統なので、
//! ID を振っても試行の乱数列は変わりません。

use ulid::Ulid;

use crate::domain::RunId;
use crate::ports::Clock;

pub trait IdGenerator {
    fn generate_run_id(&self) -> RunId;
}

/// ULID ベースの ID 生成器
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_run_id(&self) -> RunId {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        RunId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
