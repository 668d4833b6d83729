//! Diagnostic output.

use std::sync::Arc;

use elang_ir::TypeTag;
use elang_value::{no_matching_overload, Value};

use super::Registrar;
use crate::print_handler::SharedPrintHandler;

/// `show` line for a value: `<value> (type: <Kind>)`.
pub(crate) fn show_line(value: &Value) -> String {
    format!("{value} (type: {})", value.kind())
}

pub(super) fn register(registrar: &mut Registrar<'_>, print_handler: &SharedPrintHandler) {
    let handler = Arc::clone(print_handler);
    registrar.native("show", &[TypeTag::Any], move |args| match args {
        [value] => {
            handler.println(&show_line(value));
            Ok(Value::Void)
        }
        _ => Err(no_matching_overload("show", args)),
    });
}
