use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// Hook that reports pointer presses landing outside `container`.
///
/// The document listener only exists while `active` is true. It is held as an
/// [`EventListener`] handle owned by the effect, so deactivating or unmounting
/// drops it and the browser subscription goes with it.
#[hook]
pub fn use_outside_click(container: NodeRef, active: bool, on_outside: Callback<()>) {
    use_effect_with(active, move |active| {
        let listener = (*active).then(|| {
            let document = gloo::utils::document();
            EventListener::new(&document, "pointerdown", move |event| {
                let Some(container) = container.cast::<Node>() else {
                    return;
                };
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|target| container.contains(Some(&target)));

                if !inside {
                    on_outside.emit(());
                }
            })
        });

        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{pointer_down, recorder, settle, TestRoot};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq, Clone)]
    struct HostProps {
        active: bool,
        on_outside: Callback<()>,
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        let container = use_node_ref();
        use_outside_click(container.clone(), props.active, props.on_outside.clone());

        html! {
            <div class="host" ref={container}>
                <button type="button" class="inner">{"inside"}</button>
            </div>
        }
    }

    fn press_outside() {
        pointer_down(&gloo::utils::document());
        pointer_down(&gloo::utils::body());
    }

    #[wasm_bindgen_test]
    async fn test_listener_lives_only_while_active() {
        let root = TestRoot::new();
        let (presses, on_outside) = recorder::<()>();
        let props = HostProps { active: false, on_outside };

        let mut app = yew::Renderer::<Host>::with_root_and_props(root.element(), props.clone()).render();
        settle().await;

        press_outside();
        assert_eq!(presses.borrow().len(), 0);

        app.update(HostProps { active: true, ..props.clone() });
        settle().await;

        press_outside();
        assert_eq!(presses.borrow().len(), 2);

        // Presses inside the container are not outside activations
        pointer_down(&root.find(".inner").unwrap());
        pointer_down(&root.find(".host").unwrap());
        assert_eq!(presses.borrow().len(), 2);

        app.update(HostProps { active: false, ..props.clone() });
        settle().await;

        press_outside();
        assert_eq!(presses.borrow().len(), 2);
    }

    #[wasm_bindgen_test]
    async fn test_unmount_removes_listener() {
        let root = TestRoot::new();
        let (presses, on_outside) = recorder::<()>();

        let app = yew::Renderer::<Host>::with_root_and_props(
            root.element(),
            HostProps { active: true, on_outside },
        )
        .render();
        settle().await;

        press_outside();
        assert_eq!(presses.borrow().len(), 2);

        app.destroy();
        settle().await;

        press_outside();
        assert_eq!(presses.borrow().len(), 2);
    }
}
