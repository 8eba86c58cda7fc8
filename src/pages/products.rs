//! Products Screen
//!
//! Product CRUD. The image rides along as part of a multipart form.
//! Notices on this screen use a shorter timeout than the default.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ImageUpload, ProductPayload};
use crate::components::{
    ConfirmDialog, ConfirmIntent, ConfirmKind, Modal, ModalMode, Pagination, SearchBar,
};
use crate::forms::{self, FieldErrors};
use crate::list::{ListState, ReloadSeq};
use crate::models::{Category, Product};
use crate::notify::{NoticeKind, Notifier};

const PAGE_SIZE: usize = 10;
const NOTICE_MS: u32 = 3000;

fn matches_product(product: &Product, term: &str, filter: &str) -> bool {
    let in_search = term.is_empty() || product.name.to_lowercase().contains(term);
    let in_filter = filter.is_empty()
        || product
            .category_id
            .map(|id| id.to_string() == filter)
            .unwrap_or(false);
    in_search && in_filter
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let list = ListState::<Product>::new(PAGE_SIZE);
    let seq = ReloadSeq::default();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (modal, set_modal) = signal::<Option<ModalMode<Product>>>(None);
    let (confirming, set_confirming) = signal::<Option<ConfirmIntent<Product>>>(None);
    let (confirm_busy, set_confirm_busy) = signal(false);

    Effect::new({
        let seq = seq.clone();
        move |_| {
            let _ = reload_trigger.get();
            let ticket = seq.begin();
            let seq = seq.clone();
            spawn_local(async move {
                match api::list_products().await {
                    Ok(products) => {
                        if seq.is_current(ticket) {
                            list.load(products);
                        }
                    }
                    Err(e) => notifier.show(NoticeKind::Error, e.to_string(), NOTICE_MS),
                }
                if let Ok(cats) = api::list_categories().await {
                    set_categories.set(cats);
                }
                set_loading.set(false);
            });
        }
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let run_confirm = move || {
        let Some(intent) = confirming.get_untracked() else { return };
        set_confirm_busy.set(true);
        spawn_local(async move {
            let result = api::delete_product(intent.target.id).await;
            set_confirm_busy.set(false);
            match result {
                Ok(()) => {
                    notifier.show(
                        NoticeKind::Success,
                        format!("\"{}\" deleted", intent.target.name),
                        NOTICE_MS,
                    );
                    set_confirming.set(None);
                    reload();
                }
                Err(e) => notifier.show(NoticeKind::Error, e.to_string(), NOTICE_MS),
            }
        });
    };

    view! {
        <div class="page products-page">
            <div class="page-toolbar">
                <SearchBar
                    placeholder="Search products..."
                    value=list.search
                    on_input=Callback::new(move |term| list.set_search(term))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| list.set_filter(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {move || categories.get().into_iter().map(|cat| view! {
                        <option value=cat.id.to_string()>{cat.name.clone()}</option>
                    }).collect_view()}
                </select>
                <button class="primary-btn" on:click=move |_| set_modal.set(Some(ModalMode::Create))>
                    "Add product"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="table-skeleton">"Loading products..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || {
                    let pv = list.view(matches_product);
                    if pv.rows.is_empty() {
                        let searching = !list.search.get().trim().is_empty()
                            || !list.filter.get().is_empty();
                        let copy = if searching {
                            "No products match the current search."
                        } else {
                            "No products yet."
                        };
                        return view! { <div class="empty-state">{copy}</div> }.into_any();
                    }
                    let pages = pv.pages;
                    let category_names = categories.get();
                    view! {
                        <div class="card-grid">
                            {pv.rows.into_iter().map(|product| {
                                let category = product
                                    .category_id
                                    .and_then(|id| category_names.iter().find(|c| c.id == id))
                                    .map(|c| c.name.clone())
                                    .unwrap_or_else(|| "Uncategorized".to_string());
                                let edit_product = product.clone();
                                let delete_product = product.clone();
                                view! {
                                    <div class="product-card">
                                        {product.image_url.clone().map(|url| view! {
                                            <img class="product-image" src=url alt=product.name.clone()/>
                                        })}
                                        <div class="product-name">{product.name.clone()}</div>
                                        <div class="product-price">{format!("{:.2}", product.price)}</div>
                                        <div class="product-category">{category}</div>
                                        <div class="row-actions">
                                            <button on:click=move |_| set_modal.set(Some(ModalMode::Edit(edit_product.clone())))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="danger-btn"
                                                on:click=move |_| set_confirming.set(Some(ConfirmIntent {
                                                    kind: ConfirmKind::Delete,
                                                    target: delete_product.clone(),
                                                }))
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                        <Pagination
                            page=pv.page
                            pages=pv.pages
                            on_select=Callback::new(move |p| list.go_to(p, pages))
                        />
                    }.into_any()
                }}
            </Show>

            {move || modal.get().map(|mode| view! {
                <ProductForm
                    mode=mode
                    categories=categories
                    on_done=Callback::new(move |saved: bool| {
                        set_modal.set(None);
                        if saved {
                            reload();
                        }
                    })
                />
            })}

            {move || confirming.get().map(|intent| view! {
                <ConfirmDialog
                    title="Delete product"
                    message=format!("Delete \"{}\"?", intent.target.name)
                    busy=confirm_busy
                    on_confirm=Callback::new(move |_| run_confirm())
                    on_cancel=Callback::new(move |_| set_confirming.set(None))
                />
            })}
        </div>
    }
}

/// Read the picked file into memory so it can be sent as a multipart part
fn read_image(input: web_sys::HtmlInputElement, set_image: WriteSignal<Option<ImageUpload>>) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        set_image.set(None);
        return;
    };
    let filename = file.name();
    let mime = file.type_();
    spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                set_image.set(Some(ImageUpload { filename, mime, bytes }));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[PRODUCTS] File read failed: {:?}", e).into());
                set_image.set(None);
            }
        }
    });
}

#[component]
fn ProductForm(
    mode: ModalMode<Product>,
    categories: ReadSignal<Vec<Category>>,
    #[prop(into)] on_done: Callback<bool>,
) -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let editing = match &mode {
        ModalMode::Edit(product) | ModalMode::View(product) => Some(product.clone()),
        ModalMode::Create => None,
    };
    let title = if editing.is_some() { "Edit product" } else { "Add product" };
    let existing_id = editing.as_ref().map(|p| p.id);

    let (name, set_name) = signal(editing.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let (price, set_price) = signal(editing.as_ref().map(|p| p.price).unwrap_or(0.0));
    let (category_id, set_category_id) = signal(editing.as_ref().and_then(|p| p.category_id));
    let (description, set_description) = signal(
        editing
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (image, set_image) = signal::<Option<ImageUpload>>(None);
    let (errors, set_errors) = signal(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let mut field_errors = FieldErrors::new();
        forms::required("name", &name.get(), &mut field_errors);
        forms::positive_number("price", price.get(), &mut field_errors);
        let blocked = !field_errors.is_empty();
        set_errors.set(field_errors);
        if blocked {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let payload = ProductPayload {
                name: name.get_untracked().trim().to_string(),
                price: price.get_untracked(),
                category_id: category_id.get_untracked(),
                description: description.get_untracked(),
                image: image.get_untracked(),
            };
            let result = match existing_id {
                Some(id) => api::update_product(id, &payload).await,
                None => api::create_product(&payload).await,
            };
            set_submitting.set(false);
            match result {
                Ok(saved) => {
                    notifier.show(
                        NoticeKind::Success,
                        format!("\"{}\" saved", saved.name),
                        NOTICE_MS,
                    );
                    on_done.run(true);
                }
                Err(e) => notifier.show(NoticeKind::Error, e.to_string(), NOTICE_MS),
            }
        });
    };

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .cloned()
            .map(|message| view! { <span class="field-error">{message}</span> })
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| on_done.run(false))>
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("name")}
                <label>
                    "Price"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || price.get().to_string()
                        on:input=move |ev| set_price.set(event_target_value(&ev).parse().unwrap_or(0.0))
                    />
                </label>
                {move || field_error("price")}
                <label>
                    "Category"
                    <select on:change=move |ev| {
                        set_category_id.set(event_target_value(&ev).parse().ok())
                    }>
                        <option value="">"Uncategorized"</option>
                        {move || categories.get().into_iter().map(|cat| view! {
                            <option
                                value=cat.id.to_string()
                                selected=category_id.get_untracked() == Some(cat.id)
                            >
                                {cat.name.clone()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Image"
                    <input
                        type="file"
                        accept="image/*"
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            read_image(input.clone(), set_image);
                        }
                    />
                </label>
                {move || image.get().map(|img| view! {
                    <span class="file-hint">{format!("{} ({} KB)", img.filename, img.bytes.len() / 1024)}</span>
                })}
                <div class="modal-actions">
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_done.run(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
