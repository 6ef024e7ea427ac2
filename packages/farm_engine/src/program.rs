use crate::{
    action::Action,
    script::{Command, MacroProgram, Script, ScriptSet},
};

include!(concat!(env!("OUT_DIR"), "/macro_program.rs"));

/// The macro compiled from `config/macro.toml`.
pub fn active_program() -> &'static MacroProgram {
    &MACRO_PROGRAM
}
