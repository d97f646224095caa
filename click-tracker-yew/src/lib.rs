//! # Click-Tracker-Yew
//!
//! This crate provides a Yew component that runs a [ClickTracker] in the
//! browser. The component owns the tracker, issues the requests it asks for
//! over `fetch`, and feeds each outcome back in as a transition on the Yew
//! event loop, so the tracker only ever has one writer.
//!
//! Rendering is delegated to a [TrackerView], which turns the tracker's
//! [ViewModel] into [yew::Html]. [DefaultView] is the stock layout.

pub use crate::http::FetchClickApi;
pub use crate::init_tracing::init_tracing;
pub use crate::view::{DefaultView, TrackerView, ViewContext};
pub use click_tracker::{ApiConfig, ClickTracker, TrackerError, TrackerTransition, ViewModel};
use click_tracker::ApiRequest;
pub use client::ClientBuilder;
use std::marker::PhantomData;
use yew::{Callback, Component, Properties};

mod client;
mod http;
mod init_tracing;
mod view;

/// Properties for [ClickTrackerComponent].
#[derive(Properties, Clone, PartialEq)]
pub struct ClickTrackerProps {
    /// Where the backend lives.
    pub config: ApiConfig,

    /// Invoked with each error as it is recorded, including repeats of the
    /// error already shown. The error is also shown on the page; this is for
    /// hosts that want to react to it too.
    #[prop_or_default]
    pub onerror: Callback<TrackerError>,
}

/// A message this component could receive, either from the user or from a
/// request settling.
#[derive(Debug)]
pub enum Msg {
    Transition(TrackerTransition),
}

/// Yew component which owns a [ClickTracker] and keeps it in sync with the
/// backend.
pub struct ClickTrackerComponent<V: TrackerView = DefaultView> {
    tracker: ClickTracker,
    api: FetchClickApi,
    _ph: PhantomData<V>,
}

impl<V: TrackerView> ClickTrackerComponent<V> {
    /// Start `request` without waiting for it. Its outcome arrives later as a
    /// [Msg::Transition]; nothing is cancelled if another request overlaps it.
    fn issue(&self, context: &yew::Context<Self>, request: ApiRequest) {
        let api = self.api.clone();
        context.link().send_future(async move {
            let transition = click_tracker::settle(&api, request).await;
            Msg::Transition(transition)
        });
    }
}

impl<V: TrackerView> Component for ClickTrackerComponent<V> {
    type Message = Msg;
    type Properties = ClickTrackerProps;

    /// On creation, we fetch the initial counts.
    fn create(context: &yew::Context<Self>) -> Self {
        tracing::info!(api = context.props().config.base_url(), "Mounting click tracker.");
        let result = Self {
            tracker: ClickTracker::new(),
            api: FetchClickApi::new(context.props().config.clone()),
            _ph: PhantomData,
        };

        context
            .link()
            .send_message(Msg::Transition(TrackerTransition::Mount));

        result
    }

    fn update(&mut self, context: &yew::Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Transition(transition) => {
                let step = self.tracker.step(transition);
                if let Some(request) = step.next {
                    self.issue(context, request);
                }
                if let Some(error) = step.recorded {
                    context.props().onerror.emit(error);
                }
                true
            }
        }
    }

    fn changed(&mut self, context: &yew::Context<Self>, _old_props: &Self::Properties) -> bool {
        self.api = FetchClickApi::new(context.props().config.clone());
        true
    }

    fn view(&self, context: &yew::Context<Self>) -> yew::Html {
        let model = ViewModel::new(&self.tracker, self.api.config());
        let view_context = ViewContext {
            callback: context.link().callback(Msg::Transition),
        };
        V::view(&model, &view_context)
    }
}
