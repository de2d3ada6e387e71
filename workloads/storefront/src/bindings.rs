//! Views kept in sync with the basket.
//!
//! A [`ViewBinding`] subscribes to a [`BasketStore`] and re-renders its
//! fragment after every add or remove. Bindings only read the basket handed
//! to their callback; mutation stays with the store.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use storefront_commerce::basket::{Basket, BasketStore, SubscriptionId};
use storefront_commerce::Money;

use crate::sections::{render_basket_badge, render_checkout_section};

/// A rendered fragment that follows the basket.
#[derive(Debug)]
pub struct ViewBinding {
    name: &'static str,
    html: Rc<RefCell<String>>,
    renders: Rc<Cell<u64>>,
    subscription: Option<SubscriptionId>,
}

impl ViewBinding {
    /// Render once from the current basket, then re-render on every change.
    pub fn attach<F>(name: &'static str, store: &mut BasketStore, render: F) -> Self
    where
        F: Fn(&Basket) -> String + 'static,
    {
        let html = Rc::new(RefCell::new(render(store.basket())));
        let renders = Rc::new(Cell::new(1));

        let target = Rc::clone(&html);
        let counter = Rc::clone(&renders);
        let subscription = store.subscribe(move |_event, basket| {
            *target.borrow_mut() = render(basket);
            counter.set(counter.get() + 1);
        });

        Self {
            name,
            html,
            renders,
            subscription: Some(subscription),
        }
    }

    /// The floating basket badge.
    pub fn badge(store: &mut BasketStore) -> Self {
        Self::attach("basket_badge", store, render_basket_badge)
    }

    /// The checkout rows and totals.
    pub fn checkout(store: &mut BasketStore, shipping: Money) -> Self {
        Self::attach("checkout", store, move |basket| {
            render_checkout_section(basket, shipping)
        })
    }

    /// Section name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The last rendered fragment.
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    /// How many times the fragment has been rendered, the initial render
    /// included.
    pub fn render_count(&self) -> u64 {
        self.renders.get()
    }

    /// Check whether the binding still follows the store.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop following the store. The last fragment stays readable.
    pub fn detach(&mut self, store: &mut BasketStore) -> bool {
        match self.subscription.take() {
            Some(id) => store.unsubscribe(id),
            None => false,
        }
    }
}
