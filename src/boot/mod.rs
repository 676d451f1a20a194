//! Fake-BIOS boot sequence shown at startup.
//!
//! Three phases, all tick-driven:
//!
//! 1. `Bios`: log lines reveal one per ~80ms under the bootloader header
//! 2. `Loader`: a progress bar fills in random bursts every ~150ms
//! 3. `Access`: "ACCESS GRANTED" holds for ~1.2s, then the main screen
//!
//! Purely presentational: any key skips it, and reduced-motion config
//! bypasses it entirely.

use rand::{thread_rng, Rng};

use crate::effects::ms_to_ticks;

/// The scripted BIOS log, revealed top to bottom.
pub const BOOT_LOGS: [&str; 16] = [
    "BIOS DATE 01/15/25 15:22:05 VER 1.0.2",
    "CPU: INTEL(R) CORE(TM) i9-12900K @ 5.20GHZ",
    "SPEED: 5200 MHZ",
    "cl_flush_monitor..... [ OK ]",
    "check_cpu_flags...... [ OK ]",
    "waking_up_cores...... [ OK ]",
    "dram_integrity_check. [ OK ]",
    "allocating_vram...... [ OK ]",
    "loading_kernel....... [ OK ]",
    "mounting_root_fs..... [ OK ]",
    "init_graphics_driver. [ OK ]",
    "starting_network..... [ OK ]",
    "handshake_protocol... [ OK ]",
    "user_profile_data.... [ FOUND ]",
    "decrypting_assets.... [ OK ]",
    "initializing_ui...... [ WAITING ]",
];

/// Right-hand header tag next to the bootloader label.
pub const MEM_CHECK_TAG: &str = "MEM: 64TB OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Bios,
    Loader,
    Access,
    Complete,
}

#[derive(Debug, Clone)]
pub struct BootSequence {
    phase: BootPhase,
    revealed_logs: usize,
    progress: u8,
    /// Tick of the last phase step (log reveal or progress burst).
    last_step_tick: Option<u64>,
    /// Tick at which the access splash appeared.
    access_since: u64,
    log_interval: u64,
    progress_interval: u64,
    access_hold: u64,
}

impl BootSequence {
    pub fn new() -> Self {
        Self {
            phase: BootPhase::Bios,
            revealed_logs: 0,
            progress: 0,
            last_step_tick: None,
            access_since: 0,
            log_interval: ms_to_ticks(80),
            progress_interval: ms_to_ticks(150),
            access_hold: ms_to_ticks(1200),
        }
    }

    /// Advance the sequence. Returns whether visible output changed.
    pub fn update(&mut self, current_tick: u64) -> bool {
        let last = *self.last_step_tick.get_or_insert(current_tick);
        match self.phase {
            BootPhase::Bios => {
                if current_tick.saturating_sub(last) < self.log_interval {
                    return false;
                }
                self.last_step_tick = Some(current_tick);
                if self.revealed_logs < BOOT_LOGS.len() {
                    self.revealed_logs += 1;
                } else {
                    self.phase = BootPhase::Loader;
                }
                true
            }
            BootPhase::Loader => {
                if current_tick.saturating_sub(last) < self.progress_interval {
                    return false;
                }
                self.last_step_tick = Some(current_tick);
                if self.progress >= 100 {
                    self.phase = BootPhase::Access;
                    self.access_since = current_tick;
                } else {
                    // Random burst, 5..=29 percent per step.
                    let burst = thread_rng().gen_range(5..30u8);
                    self.progress = self.progress.saturating_add(burst).min(100);
                }
                true
            }
            BootPhase::Access => {
                if current_tick.saturating_sub(self.access_since) < self.access_hold {
                    return false;
                }
                self.phase = BootPhase::Complete;
                true
            }
            BootPhase::Complete => false,
        }
    }

    /// Jump straight to the end (any key during boot).
    pub fn skip(&mut self) {
        self.phase = BootPhase::Complete;
        self.revealed_logs = BOOT_LOGS.len();
        self.progress = 100;
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Complete
    }

    /// Log lines revealed so far.
    pub fn visible_logs(&self) -> &'static [&'static str] {
        &BOOT_LOGS[..self.revealed_logs]
    }

    /// Loader progress in percent.
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the sequence tick by tick until it completes or the budget
    /// runs out, returning the tick it finished at.
    fn run_to_completion(boot: &mut BootSequence, budget: u64) -> u64 {
        for tick in 0..budget {
            boot.update(tick);
            if boot.is_complete() {
                return tick;
            }
        }
        panic!("boot did not complete within {} ticks", budget);
    }

    #[test]
    fn test_starts_in_bios_with_no_logs() {
        let boot = BootSequence::new();
        assert_eq!(boot.phase(), BootPhase::Bios);
        assert!(boot.visible_logs().is_empty());
        assert_eq!(boot.progress(), 0);
    }

    #[test]
    fn test_logs_reveal_one_per_interval() {
        let mut boot = BootSequence::new();
        boot.update(0);
        assert!(boot.visible_logs().is_empty(), "first log waits one interval");
        for tick in 1..=5 {
            boot.update(tick);
        }
        assert_eq!(boot.visible_logs().len(), 1);
        assert_eq!(boot.visible_logs()[0], BOOT_LOGS[0]);
        for tick in 6..=10 {
            boot.update(tick);
        }
        assert_eq!(boot.visible_logs().len(), 2);
    }

    #[test]
    fn test_bios_hands_off_to_loader_after_all_logs() {
        let mut boot = BootSequence::new();
        // 16 reveals plus the hand-off step, 5 ticks each.
        for tick in 0..=(17 * 5) {
            boot.update(tick);
        }
        assert_eq!(boot.phase(), BootPhase::Loader);
        assert_eq!(boot.visible_logs().len(), BOOT_LOGS.len());
    }

    #[test]
    fn test_progress_is_monotonic_and_capped() {
        let mut boot = BootSequence::new();
        let mut last_progress = 0;
        for tick in 0..2000 {
            boot.update(tick);
            assert!(boot.progress() >= last_progress, "progress went backward");
            assert!(boot.progress() <= 100);
            last_progress = boot.progress();
            if boot.phase() == BootPhase::Access {
                break;
            }
        }
        assert_eq!(last_progress, 100);
    }

    #[test]
    fn test_full_sequence_completes_in_bounded_time() {
        let mut boot = BootSequence::new();
        // Worst case: 17 bios steps + 20 minimum-burst loader steps +
        // the hand-off + 75 access-hold ticks, with margin.
        run_to_completion(&mut boot, 2000);
        assert!(boot.is_complete());
        assert_eq!(boot.progress(), 100);
    }

    #[test]
    fn test_access_phase_holds_before_completion() {
        let mut boot = BootSequence::new();
        let mut access_at = None;
        for tick in 0..2000 {
            boot.update(tick);
            if boot.phase() == BootPhase::Access && access_at.is_none() {
                access_at = Some(tick);
            }
            if boot.is_complete() {
                let held = tick - access_at.expect("completed without access phase");
                assert!(held >= 75, "access splash held only {} ticks", held);
                return;
            }
        }
        panic!("boot never completed");
    }

    #[test]
    fn test_skip_jumps_to_complete() {
        let mut boot = BootSequence::new();
        boot.update(0);
        boot.skip();
        assert!(boot.is_complete());
        assert_eq!(boot.visible_logs().len(), BOOT_LOGS.len());
        assert_eq!(boot.progress(), 100);
    }

    #[test]
    fn test_complete_sequence_stops_changing() {
        let mut boot = BootSequence::new();
        boot.skip();
        assert!(!boot.update(10_000));
    }
}
