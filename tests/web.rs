#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use reversi_strategies::wasm::ReversiGame;
use reversi_strategies::wasm_ready;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn config(strategy: &str) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"strategy".into(), &strategy.into()).unwrap();
    Reflect::set(&obj, &"computerColor".into(), &"white".into()).unwrap();
    Reflect::set(&obj, &"seed".into(), &JsValue::from_f64(7.0)).unwrap();
    obj.into()
}

fn ok<T>(result: Result<T, wasm_bindgen::JsError>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => panic!("unexpected JsError"),
    }
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &name.into()).unwrap()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn default_game_exposes_opening_state() {
    let game = ok(ReversiGame::new(JsValue::UNDEFINED));

    let moves = Array::from(&ok(game.legal_moves()));
    assert_eq!(moves.length(), 4);
    let first = moves.get(0);
    assert_eq!(field(&first, "row").as_f64(), Some(2.0));
    assert_eq!(field(&first, "col").as_f64(), Some(3.0));

    let state = ok(game.state());
    assert_eq!(field(&state, "currentPlayer").as_string().as_deref(), Some("black"));
    assert_eq!(field(&state, "blackCount").as_f64(), Some(2.0));
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
}

#[wasm_bindgen_test]
fn human_and_computer_alternate() {
    for strategy in ["random", "max-capture", "advanced"] {
        let mut game = ok(ReversiGame::new(config(strategy)));

        ok(game.place(2, 3));
        assert!(game.is_computer_turn());
        let reply = ok(game.computer_move());
        assert!(field(&reply, "row").as_f64().is_some());

        let state = ok(game.state());
        assert_eq!(field(&state, "currentPlayer").as_string().as_deref(), Some("black"));
        assert!(!game.is_computer_turn());
    }
}

#[wasm_bindgen_test]
fn computer_opens_as_black() {
    let obj = Object::new();
    Reflect::set(&obj, &"strategy".into(), &"max-capture".into()).unwrap();
    Reflect::set(&obj, &"computerColor".into(), &"black".into()).unwrap();
    let mut game = ok(ReversiGame::new(obj.into()));

    assert!(game.is_computer_turn());
    assert!(game.place(2, 3).is_err());
    let opening = ok(game.computer_move());
    assert_eq!(field(&opening, "row").as_f64(), Some(2.0));
    assert_eq!(field(&opening, "col").as_f64(), Some(3.0));
    ok(game.place(2, 2));
}

#[wasm_bindgen_test]
fn illegal_moves_and_bad_config_are_errors() {
    let mut game = ok(ReversiGame::new(JsValue::NULL));
    assert!(game.place(0, 0).is_err());
    assert!(game.place(258, 3).is_err());
    assert!(game.place(2, 259).is_err());
    assert!(game.pass().is_err());

    let state = ok(game.state());
    assert_eq!(field(&state, "blackCount").as_f64(), Some(2.0));
    assert_eq!(field(&state, "currentPlayer").as_string().as_deref(), Some("black"));

    assert!(ReversiGame::new(config("minimax")).is_err());
}
