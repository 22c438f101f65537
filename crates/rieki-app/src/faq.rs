//! Scripted FAQ tree (簡単チャットボット)
//!
//! 静的な分岐データのみ。計算エンジンとは状態を共有しない。

use std::collections::HashMap;
use std::sync::LazyLock;

/// 選択肢: リンクを開くか、次のノードへ進む
#[derive(Debug, Clone, Copy)]
pub struct FaqOption {
    pub text: &'static str,
    pub url: Option<&'static str>,
    pub next_id: Option<&'static str>,
}

/// 質問ノード
#[derive(Debug, Clone, Copy)]
pub struct FaqNode {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [FaqOption],
}

/// 開始ノードID
pub const FAQ_START: &str = "start";

pub static FAQ_TREE: LazyLock<HashMap<&'static str, FaqNode>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "start",
        FaqNode {
            id: "start",
            text: "何について知りたいですか？",
            options: &[
                FaqOption {
                    text: "アクセスについて知りたい",
                    url: None,
                    next_id: Some("access"),
                },
                FaqOption {
                    text: "利用開始について知りたい",
                    url: None,
                    next_id: Some("startGuide"),
                },
                FaqOption {
                    text: "問い合わせについて",
                    url: None,
                    next_id: Some("contact"),
                },
            ],
        },
    );

    m.insert(
        "access",
        FaqNode {
            id: "access",
            text: "アクセスページはこちらです。",
            options: &[FaqOption {
                text: "アクセスページを開く",
                url: Some("https://example.com/access"),
                next_id: None,
            }],
        },
    );

    m.insert(
        "startGuide",
        FaqNode {
            id: "startGuide",
            text: "利用開始ページはこちらです。",
            options: &[FaqOption {
                text: "利用開始ページを開く",
                url: Some("https://example.com/start"),
                next_id: None,
            }],
        },
    );

    m.insert(
        "contact",
        FaqNode {
            id: "contact",
            text: "お問い合わせページはこちらです。",
            options: &[FaqOption {
                text: "お問い合わせページを開く",
                url: Some("https://example.com/contact"),
                next_id: None,
            }],
        },
    );

    m
});

/// Get an FAQ node by id
pub fn faq_node(id: &str) -> Option<&'static FaqNode> {
    FAQ_TREE.get(id)
}
