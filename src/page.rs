//! HTML rendering of the page
//!
//! Buttons are plain forms posting to the host's action routes, so the page
//! works without any script. Markup goes through leptos server-side
//! rendering, which escapes contract text and form values.

use leptos::prelude::*;

use crate::session::PageView;

pub const PAGE_TITLE: &str = "Welcome to My Simple Contract!";

const PAGE_STYLE: &str = ".container { text-align: center; }";

/// Value written by the "Set Data" button
pub const DEMO_DATA: u64 = 42;

/// Value written by the "Set Name" button
pub const DEMO_NAME: &str = "Vikash";

pub const CONNECT_ROUTE: &str = "/connect";
pub const SET_DATA_ROUTE: &str = "/set-data";
pub const SET_NAME_ROUTE: &str = "/set-name";
pub const CHANGE_OWNER_ROUTE: &str = "/change-owner";

pub fn render_page(state: &PageView, notice: Option<&str>) -> String {
    let notice = notice.map(|text| {
        let text = text.to_string();
        view! { <p class="notice">{text}</p> }
    });

    let content = match state {
        PageView::InstallWallet => view! {
            <p>"Please install a wallet provider in order to use this app."</p>
        }
        .into_any(),
        PageView::Connect => view! {
            <form method="post" action=CONNECT_ROUTE>
                <button type="submit">"Please connect your wallet"</button>
            </form>
        }
        .into_any(),
        PageView::Connected {
            account,
            details,
            new_owner,
        } => connected_view(
            account.to_string(),
            details.data.map(|d| d.to_string()).unwrap_or_default(),
            details.name.clone(),
            details.owner.clone(),
            new_owner.clone(),
        )
        .into_any(),
    };

    let document = view! {
        <html>
            <head>
                <meta charset="utf-8"/>
                <title>{PAGE_TITLE}</title>
                <style>{PAGE_STYLE}</style>
            </head>
            <body>
                <main class="container">
                    <header>
                        <h1>{PAGE_TITLE}</h1>
                    </header>
                    {notice}
                    {content}
                </main>
            </body>
        </html>
    };

    format!("<!DOCTYPE html>\n{}\n", document.to_html())
}

fn connected_view(
    account: String,
    data: String,
    name: String,
    owner: String,
    new_owner: String,
) -> impl IntoView {
    view! {
        <div>
            <p>{format!("Your Account: {}", account)}</p>
            <p>{format!("Data: {}", data)}</p>
            <p>{format!("Name: {}", name)}</p>
            <p>{format!("Owner: {}", owner)}</p>
            <form method="post" action=SET_DATA_ROUTE>
                <button type="submit">{format!("Set Data to {}", DEMO_DATA)}</button>
            </form>
            <form method="post" action=SET_NAME_ROUTE>
                <button type="submit">{format!("Set Name to {}", DEMO_NAME)}</button>
            </form>
            <form method="post" action=CHANGE_OWNER_ROUTE>
                <input type="text" name="new_owner" placeholder="New Owner Address" value=new_owner/>
                <button type="submit">"Change Owner"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DetailsSnapshot;
    use alloy_primitives::{Address, U256};

    #[test]
    fn test_install_prompt() {
        let html = render_page(&PageView::InstallWallet, None);
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("Please install a wallet provider"));
        assert!(!html.contains(CONNECT_ROUTE));
    }

    #[test]
    fn test_connect_button() {
        let html = render_page(&PageView::Connect, Some("A wallet provider is required"));
        assert!(html.contains(r#"action="/connect""#));
        assert!(html.contains(r#"<p class="notice">A wallet provider is required</p>"#));
        assert!(!html.contains("Your Account"));
    }

    #[test]
    fn test_connected_view_escapes_contract_text() {
        let view = PageView::Connected {
            account: Address::repeat_byte(0x11),
            details: DetailsSnapshot {
                data: Some(U256::from(42)),
                name: "<script>alert(1)</script>".to_string(),
                owner: Address::repeat_byte(0x22).to_string(),
            },
            new_owner: "\"><b>".to_string(),
        };

        let html = render_page(&view, None);
        assert!(html.contains("<p>Data: 42</p>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;"));
        assert!(!html.contains(r#""><b>"#));
        assert!(html.contains("Set Data to 42"));
        assert!(html.contains("Set Name to Vikash"));
    }

    #[test]
    fn test_empty_data_before_first_read() {
        let view = PageView::Connected {
            account: Address::ZERO,
            details: DetailsSnapshot::default(),
            new_owner: String::new(),
        };
        assert!(render_page(&view, None).contains("<p>Data: </p>"));
    }
}
