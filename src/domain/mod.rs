// 領域層：數值型別與加總介面，只依賴 std/serde

pub mod model;
pub mod ports;
