pub mod stage1_bracket;
pub mod stage2_derive;
pub mod stage3_interpolate;
pub mod stage4_aggregate;
pub mod stage5_gate;
