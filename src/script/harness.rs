use crate::core::ChainHash;
use crate::script::engine::{ScriptEngine, ScriptFlags, ScriptTx};
use data_encoding::HEXLOWER;
use log::info;

// Only the first input is executed.
const TX_INDEX: usize = 0;

/// One executed opcode and the stack it left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub index: usize,
    pub disasm: String,
    pub stack: Vec<Vec<u8>>,
}

/// Steps taken before execution finished or failed.
///
/// `error` holds the engine error that stopped execution, if any; the steps
/// recorded up to that point are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTrace<Err> {
    pub tx_hash: ChainHash,
    pub steps: Vec<ScriptStep>,
    pub error: Option<Err>,
}

impl<Err> ScriptTrace<Err> {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn final_stack(&self) -> Option<&[Vec<u8>]> {
        self.steps.last().map(|step| step.stack.as_slice())
    }

    /// Drop the partial steps and keep only the outcome.
    pub fn into_result(self) -> Result<ScriptTrace<Err>, Err> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

enum StepEvent<'a> {
    Disasm(usize, &'a str),
    Stack(usize, &'a [Vec<u8>]),
}

/// Executes the first input of `tx` against `script_pub_key`.
///
/// With `dump` set every opcode and the resulting stack are logged at info
/// level. Engine errors from construction, stepping or the final check are
/// returned as-is.
pub fn execute_tx<E: ScriptEngine>(
    dump: bool,
    script_pub_key: &[u8],
    tx: &E::Tx,
) -> Result<(), E::Error> {
    let mut vm = E::new(script_pub_key, tx, TX_INDEX, ScriptFlags::harness())?;
    let tx_hash = tx.tx_hash();
    if dump {
        info!("=== executing tx {tx_hash}");
    }

    run_to_completion(&mut vm, |event| {
        if !dump {
            return;
        }
        match event {
            StepEvent::Disasm(i, disasm) => info!("{i}: {disasm}"),
            StepEvent::Stack(i, stack) => info!("{i}: stack {}", format_stack(stack)),
        }
    })?;

    if dump {
        info!("=== SUCCESS tx {tx_hash}");
    }
    Ok(())
}

/// Same execution as [`execute_tx`], collecting each step instead of logging.
///
/// A failing engine does not discard the steps already taken; the error is
/// stored in the returned trace unchanged.
pub fn trace_tx<E: ScriptEngine>(script_pub_key: &[u8], tx: &E::Tx) -> ScriptTrace<E::Error> {
    let tx_hash = tx.tx_hash();
    let mut vm = match E::new(script_pub_key, tx, TX_INDEX, ScriptFlags::harness()) {
        Ok(vm) => vm,
        Err(err) => {
            return ScriptTrace {
                tx_hash,
                steps: Vec::new(),
                error: Some(err),
            }
        }
    };

    let mut steps = Vec::new();
    let mut pending = String::new();
    let outcome = run_to_completion(&mut vm, |event| match event {
        StepEvent::Disasm(_, disasm) => pending = disasm.to_string(),
        StepEvent::Stack(index, stack) => steps.push(ScriptStep {
            index,
            disasm: std::mem::take(&mut pending),
            stack: stack.to_vec(),
        }),
    });

    ScriptTrace {
        tx_hash,
        steps,
        error: outcome.err(),
    }
}

fn run_to_completion<E, F>(vm: &mut E, mut observe: F) -> Result<(), E::Error>
where
    E: ScriptEngine,
    F: FnMut(StepEvent<'_>),
{
    let mut i = 0;
    loop {
        let disasm = vm.disasm_pc()?;
        observe(StepEvent::Disasm(i, &disasm));

        let done = vm.step()?;
        let stack = vm.stack();
        observe(StepEvent::Stack(i, &stack));

        if done {
            break;
        }
        i += 1;
    }
    vm.check_error_condition(true)
}

/// Render a stack snapshot one item per line, bottom first.
pub fn format_stack(stack: &[Vec<u8>]) -> String {
    if stack.is_empty() {
        return "<empty>".to_string();
    }
    stack
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if item.is_empty() {
                format!("[{i}] (0 bytes)")
            } else {
                format!("[{i}] ({} bytes) {}", item.len(), HEXLOWER.encode(item))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
