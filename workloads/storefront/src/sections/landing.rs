//! Landing hero.

/// Render the hero shown at the top of the home page.
pub fn render_landing() -> String {
    r#"<section class="landing" data-section="landing">
    <div class="landing-cta">
        <h1 class="landing-message">
            <span class="landing-emphasis">Powered</span>
            <span>By Intellect</span>
            <span>Driven By Values</span>
        </h1>
        <div class="landing-buttons">
            <a href="/#promos" class="button">Buy Now</a>
            <a href="/#promos" class="link">Learn More</a>
        </div>
    </div>
    <div class="landing-image">
        <img src="/iphone.png" alt="iphone/bannerImg">
    </div>
</section>"#
        .to_string()
}
