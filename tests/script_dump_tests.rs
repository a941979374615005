//! Script harness dump output
//!
//! Runs in its own test binary so it can install a capturing logger in place
//! of `env_logger`. Lines are captured per thread, which keeps the parallel
//! tests in this file apart.

use hemi_testutil::{execute_tx, ChainHash, ScriptEngine, ScriptFlags, ScriptTx};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

const HARNESS_TARGET: &str = "hemi_testutil::script";

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info && metadata.target().starts_with(HARNESS_TARGET)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

fn capture<T>(run: impl FnOnce() -> T) -> (T, Vec<String>) {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Info);
    });
    CAPTURED.with(|lines| lines.borrow_mut().clear());
    let out = run();
    let lines = CAPTURED.with(|lines| lines.take());
    (out, lines)
}

// Each step replaces the stack with a single item holding the step number
// plus one.
struct CountingTx {
    steps: usize,
    verdict: Result<(), &'static str>,
}

impl ScriptTx for CountingTx {
    fn tx_hash(&self) -> ChainHash {
        ChainHash::zero()
    }
}

struct CountingEngine {
    total: usize,
    pc: usize,
    stack: Vec<Vec<u8>>,
    verdict: Result<(), &'static str>,
}

impl ScriptEngine for CountingEngine {
    type Tx = CountingTx;
    type Error = &'static str;

    fn new(
        _script_pub_key: &[u8],
        tx: &CountingTx,
        _tx_index: usize,
        _flags: ScriptFlags,
    ) -> Result<Self, &'static str> {
        Ok(CountingEngine {
            total: tx.steps,
            pc: 0,
            stack: Vec::new(),
            verdict: tx.verdict,
        })
    }

    fn step(&mut self) -> Result<bool, &'static str> {
        self.pc += 1;
        self.stack = vec![vec![self.pc as u8]];
        Ok(self.pc == self.total)
    }

    fn disasm_pc(&self) -> Result<String, &'static str> {
        Ok(format!("op{}", self.pc))
    }

    fn stack(&self) -> Vec<Vec<u8>> {
        self.stack.clone()
    }

    fn check_error_condition(&mut self, _final_script: bool) -> Result<(), &'static str> {
        self.verdict
    }
}

fn zero_hash() -> String {
    ChainHash::zero().to_string()
}

#[test]
fn test_dump_logs_every_step() {
    let tx = CountingTx {
        steps: 2,
        verdict: Ok(()),
    };
    let (result, lines) = capture(|| execute_tx::<CountingEngine>(true, &[0x51], &tx));

    assert_eq!(result, Ok(()));
    assert_eq!(
        lines,
        vec![
            format!("=== executing tx {}", zero_hash()),
            "0: op0".to_string(),
            "0: stack [0] (1 bytes) 01".to_string(),
            "1: op1".to_string(),
            "1: stack [0] (1 bytes) 02".to_string(),
            format!("=== SUCCESS tx {}", zero_hash()),
        ]
    );
}

#[test]
fn test_no_output_without_dump() {
    let tx = CountingTx {
        steps: 3,
        verdict: Ok(()),
    };
    let (result, lines) = capture(|| execute_tx::<CountingEngine>(false, &[0x51], &tx));

    assert_eq!(result, Ok(()));
    assert!(lines.is_empty(), "unexpected output: {lines:?}");
}

#[test]
fn test_failed_verdict_has_no_success_line() {
    let tx = CountingTx {
        steps: 1,
        verdict: Err("eval false"),
    };
    let (result, lines) = capture(|| execute_tx::<CountingEngine>(true, &[0x51], &tx));

    assert_eq!(result, Err("eval false"));
    assert_eq!(
        lines,
        vec![
            format!("=== executing tx {}", zero_hash()),
            "0: op0".to_string(),
            "0: stack [0] (1 bytes) 01".to_string(),
        ]
    );
}
