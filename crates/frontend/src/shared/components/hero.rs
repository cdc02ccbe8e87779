use std::time::Duration;

use leptos::prelude::*;

use crate::shared::dom::scroll_to_products;

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
    accent: &'static str,
}

const SLIDES: [Slide; 3] = [
    Slide {
        title: "Coleção de Verão 2024",
        subtitle: "Tecidos leves, cores vibrantes.",
        image: "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?auto=format&fit=crop&q=80&w=1600",
        accent: "blue",
    },
    Slide {
        title: "Básicos Eco-Conscientes",
        subtitle: "Moda sustentável para todos os dias.",
        image: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?auto=format&fit=crop&q=80&w=1600",
        accent: "emerald",
    },
    Slide {
        title: "Promoção de Temporada",
        subtitle: "Até 50% de desconto em estilos selecionados.",
        image: "https://images.unsplash.com/photo-1483985988355-763728e1935b?auto=format&fit=crop&q=80&w=1600",
        accent: "rose",
    },
];

fn next_slide(current: usize) -> usize {
    (current + 1) % SLIDES.len()
}

fn previous_slide(current: usize) -> usize {
    (current + SLIDES.len() - 1) % SLIDES.len()
}

/// Rotating banner at the top of the storefront.
#[component]
pub fn Hero() -> impl IntoView {
    let current = RwSignal::new(0usize);

    if let Ok(handle) = set_interval_with_handle(
        move || current.update(|c| *c = next_slide(*c)),
        Duration::from_secs(5),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <div class="hero">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(idx, slide)| {
                    view! {
                        <div class=move || if current.get() == idx { "hero__slide hero__slide--active" } else { "hero__slide" }>
                            <img src=slide.image alt=slide.title />
                            <div class="hero__overlay">
                                <span class=format!("badge badge--{}", slide.accent)>"Destaque"</span>
                                <h1>{slide.title}</h1>
                                <p>{slide.subtitle}</p>
                                <button class="button button--light" on:click=move |_| scroll_to_products()>
                                    "Ver Coleção"
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect_view()}

            <button class="hero__arrow hero__arrow--left" on:click=move |_| current.update(|c| *c = previous_slide(*c))>
                "‹"
            </button>
            <button class="hero__arrow hero__arrow--right" on:click=move |_| current.update(|c| *c = next_slide(*c))>
                "›"
            </button>

            <div class="hero__dots">
                {(0..SLIDES.len())
                    .map(|idx| {
                        view! {
                            <button
                                class=move || if current.get() == idx { "hero__dot hero__dot--active" } else { "hero__dot" }
                                on:click=move |_| current.set(idx)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_wrap_around() {
        assert_eq!(next_slide(2), 0);
        assert_eq!(previous_slide(0), 2);
        assert_eq!(previous_slide(next_slide(1)), 1);
    }
}
