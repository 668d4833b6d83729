//! Engine tests that span the evaluator, dispatcher and executor.


use elang_ir::SharedInterner;

use crate::{CallScoping, EvalMode, Interpreter, InterpreterBuilder};

/// Test interpreter sharing an interner with the program builder.
fn interpreter(call_scoping: CallScoping) -> (SharedInterner, Interpreter) {
    let interner = SharedInterner::default();
    let interp = InterpreterBuilder::new()
        .interner(interner.clone())
        .mode(EvalMode::TestRun)
        .call_scoping(call_scoping)
        .build();
    (interner, interp)
}
