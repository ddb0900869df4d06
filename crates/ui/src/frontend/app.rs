//! Leptos application with routing.
//!
//! Components hold the headless models in signals and forward DOM events to
//! them. The cart session is created once in [`App`] and passed down as a
//! prop.

use leptos::*;
use leptos_router::*;

use storefront_cart::CartSession;
use storefront_catalog::{MockProductSource, Product, ProductSource};
use storefront_core::Entity;

use crate::badge::CartBadgeModel;
use crate::card::{ActionAffordance, CardEvent, ClickTarget, ProductCard};
use crate::carousel::Carousel;
use crate::config::StorefrontConfig;
use crate::details::{DetailContent, ProductDetails};
use crate::navigation::{Route as RouteTarget, Router as RouteRecorder};
use crate::rating::{RatingDisplay, Star};

const RELATED_LIMIT: usize = 4;

const BANNERS: [&str; 3] = [
    "/images/banners/banner-1.jpg",
    "/images/banners/banner-2.jpg",
    "/images/banners/banner-3.jpg",
];

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let products = match MockProductSource::bundled() {
        Ok(source) => source.products().to_vec(),
        Err(err) => {
            logging::error!("catalog failed to load: {err}");
            Vec::new()
        }
    };

    let catalog = store_value(products);
    let config = store_value(StorefrontConfig::default());
    let cart = create_rw_signal(CartSession::new());

    view! {
        <Router>
            <header class="navbar">
                <A href="/">"Storefront"</A>
                <CartBadge cart=cart/>
            </header>
            <main>
                <Routes>
                    <Route
                        path="/"
                        view=move || view! { <HomePage catalog=catalog config=config cart=cart/> }
                    />
                    <Route
                        path="/products/:id"
                        view=move || view! { <ProductDetailsPage catalog=catalog config=config cart=cart/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn CartBadge(cart: RwSignal<CartSession>) -> impl IntoView {
    let model = store_value(cart.with_untracked(CartBadgeModel::attach));

    // Re-folds the event feed whenever the session signal changes.
    let badge = create_memo(move |_| {
        cart.with(|_| ());
        model.update_value(|m| {
            m.refresh();
        });
        model.with_value(|m| (m.text(), m.total_price()))
    });

    view! {
        <div class="cart-badge">
            {move || badge.get().0.map(|text| view! { <span class="badge">{text}</span> })}
            <span class="total">{move || badge.get().1.to_string()}</span>
        </div>
    }
}

#[component]
fn HomePage(
    catalog: StoredValue<Vec<Product>>,
    config: StoredValue<StorefrontConfig>,
    cart: RwSignal<CartSession>,
) -> impl IntoView {
    let banners: Vec<String> = BANNERS.iter().map(|s| s.to_string()).collect();

    view! {
        <CarouselView images=banners/>
        <section class="catalog">
            {catalog.with_value(|products| {
                products
                    .iter()
                    .cloned()
                    .map(|product| view! { <ProductCardView product=product config=config cart=cart/> })
                    .collect_view()
            })}
        </section>
    }
}

#[component]
fn ProductCardView(
    product: Product,
    config: StoredValue<StorefrontConfig>,
    cart: RwSignal<CartSession>,
    #[prop(optional)] disable_actions: bool,
) -> impl IntoView {
    let model = config.with_value(|c| {
        ProductCard::new(product).with_size(&c.card_width, &c.card_height)
    });
    let model = model.with_disabled_actions(disable_actions);

    let image_src = config.with_value(|c| model.image_src(c));
    let width = model.width().to_string();
    let height = model.height().to_string();
    let title = model.title().to_string();
    let price = model.price_label();
    let href = model.href();
    let rating = model.rating_display();
    let modal_id = model.quickview().modal_id().to_string();
    let content = model.quickview().content().clone();
    let alt = model.product().category().to_string();

    let card = create_rw_signal(model);
    let navigate = use_navigate();

    // Navigation is deferred until both signals are released.
    let dispatch = Callback::new(move |event: CardEvent| {
        let mut recorder = RouteRecorder::new();
        cart.update(|cart| {
            card.update(|card| {
                card.handle(event, cart, &mut recorder);
            });
        });
        if let Some(route) = recorder.history().last() {
            navigate(&route.path(), Default::default());
        }
    });
    let close_quickview = Callback::new(move |_: ()| {
        card.update(|c| c.quickview_mut().close());
    });

    let visual = move || card.with(|c| c.visual());
    let actions_class = move || {
        if visual().actions == ActionAffordance::Visible {
            "card-actions visible"
        } else {
            "card-actions"
        }
    };
    let quickview_src = image_src.clone();

    view! {
        <div class="product-card">
            <div
                class="card-frame"
                style:width=width
                style:height=height
                on:mouseenter=move |_| dispatch.call(CardEvent::PointerEnter)
                on:mouseleave=move |_| dispatch.call(CardEvent::PointerLeave)
                on:click=move |_| dispatch.call(CardEvent::Click(ClickTarget::Body))
            >
                <div
                    class="card-image"
                    style:transform=move || format!("scale({})", visual().scale)
                    style:filter=move || format!("blur({}px)", visual().blur_px)
                >
                    <img src=image_src alt=alt/>
                </div>
                <Show when=move || !disable_actions>
                    <div class=actions_class>
                        <button
                            class="btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                dispatch.call(CardEvent::Click(ClickTarget::QuickViewButton));
                            }
                        >
                            "Quick View"
                        </button>
                        <button
                            class="btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                dispatch.call(CardEvent::Click(ClickTarget::AddToCartButton));
                            }
                        >
                            "Add to Cart"
                        </button>
                    </div>
                </Show>
            </div>
            <RatingView rating=rating/>
            <h3 class="card-title">
                <A href=href>{title}</A>
            </h3>
            <span class="price">{price}</span>
            <Show when=move || card.with(|c| c.quickview().is_open())>
                <QuickviewView
                    modal_id=modal_id.clone()
                    content=content.clone()
                    image_src=quickview_src.clone()
                    on_close=close_quickview
                />
            </Show>
        </div>
    }
}

#[component]
fn QuickviewView(
    modal_id: String,
    content: DetailContent,
    image_src: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal modal-open" id=modal_id role="dialog">
            <div class="modal-box">
                <DescriptionView content=content/>
                <img src=image_src alt="" width="392" height="392"/>
                <button class="btn" on:click=move |_| on_close.call(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}

#[component]
fn DescriptionView(content: DetailContent) -> impl IntoView {
    view! {
        <div class="description">
            <h2 class="title">{content.title}</h2>
            <RatingView rating=content.rating/>
            <span class="price">{content.price_label}</span>
            <p class="body">{content.description}</p>
        </div>
    }
}

#[component]
fn RatingView(rating: RatingDisplay) -> impl IntoView {
    let label = rating.label();

    view! {
        <div class="rating" title=label>
            {rating
                .stars()
                .iter()
                .map(|star| {
                    let class = match star {
                        Star::Full => "star full",
                        Star::Half => "star half",
                        Star::Empty => "star empty",
                    };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductDetailsPage(
    catalog: StoredValue<Vec<Product>>,
    config: StoredValue<StorefrontConfig>,
    cart: RwSignal<CartSession>,
) -> impl IntoView {
    let location = use_location();
    let product = move || {
        let Some(RouteTarget::ProductDetail(id)) = location.pathname.with(|p| RouteTarget::parse(p))
        else {
            return None;
        };
        catalog.with_value(|products| products.iter().find(|p| p.id() == &id).cloned())
    };

    view! {
        {move || match product() {
            Some(product) => {
                let related = related_products(&catalog, &product);
                view! {
                    <DetailsView product=product config=config cart=cart/>
                    <section class="related">
                        {related
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <ProductCardView
                                        product=product
                                        config=config
                                        cart=cart
                                        disable_actions=true
                                    />
                                }
                            })
                            .collect_view()}
                    </section>
                }
                .into_view()
            }
            None => view! { <p class="not-found">"Product not found."</p> }.into_view(),
        }}
    }
}

/// Other products in the same category, shown as display-only cards.
fn related_products(catalog: &StoredValue<Vec<Product>>, product: &Product) -> Vec<Product> {
    let details = ProductDetails::new(product.clone());
    catalog.with_value(|products| {
        details
            .related(products, RELATED_LIMIT)
            .into_iter()
            .cloned()
            .collect()
    })
}

#[component]
fn DetailsView(
    product: Product,
    config: StoredValue<StorefrontConfig>,
    cart: RwSignal<CartSession>,
) -> impl IntoView {
    let image_src = config.with_value(|c| c.image_src(product.image_url()));
    let details = create_rw_signal(ProductDetails::new(product));
    let content = details.with_untracked(|d| d.content().clone());
    let quantity = move || details.with(|d| d.selector().value()).to_string();
    let (shows_label, input_class) = details.with_untracked(|d| {
        let selector = d.selector();
        (selector.shows_label(), selector.size().input_class())
    });

    view! {
        <div class="product-details">
            <div class="details-description">
                <DescriptionView content=content/>
            </div>
            <div class="details-purchase">
                <img src=image_src alt="" width="392" height="392"/>
                <div class="quantity">
                    <Show when=move || shows_label>
                        <span class="quantity-label">"Quantity"</span>
                    </Show>
                    <div class=format!("input {input_class}")>
                        <button on:click=move |_| details.update(|d| d.selector_mut().decrement())>
                            "-"
                        </button>
                        <input
                            class="quantity-input"
                            prop:value=quantity
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                details.update(|d| d.selector_mut().set_from_input(&raw));
                            }
                        />
                        <button on:click=move |_| details.update(|d| d.selector_mut().increment())>
                            "+"
                        </button>
                    </div>
                </div>
                <button
                    class="btn"
                    on:click=move |_| {
                        details.with_untracked(|d| {
                            cart.update(|c| {
                                d.add_to_cart(c);
                            });
                        });
                    }
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CarouselView(images: Vec<String>) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(images));
    let slides = carousel.with_untracked(|c| c.images().to_vec());

    view! {
        <div class="embla">
            <div class="embla__container">
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, src)| {
                        let class = move || {
                            if carousel.with(|c| c.current_index() == index) {
                                "embla__slide embla__slide--active"
                            } else {
                                "embla__slide"
                            }
                        };
                        view! {
                            <div class=class>
                                <img class="embla__img" src=src alt=format!("banner {index}")/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="btn btn-circle embla__arrow embla__arrow--prev"
                disabled=move || !carousel.with(|c| c.can_scroll_prev())
                on:click=move |_| carousel.update(|c| c.prev())
            >
                "‹"
            </button>
            <button
                class="btn btn-circle embla__arrow embla__arrow--next"
                disabled=move || !carousel.with(|c| c.can_scroll_next())
                on:click=move |_| carousel.update(|c| c.next())
            >
                "›"
            </button>
            <div class="embla__dots">
                {move || {
                    carousel
                        .with(|c| c.indicators())
                        .into_iter()
                        .map(|indicator| {
                            let class = if indicator.active {
                                "embla__dot embla__dot--active"
                            } else {
                                "embla__dot"
                            };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| {
                                        carousel.update(|c| {
                                            c.go_to(indicator.index);
                                        });
                                    }
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
