//! Landing page component
//!
//! A scroll-animated landing page for Ringline featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with animated stat counters and a decorative video loop
//! - Live call rack demo cycling through call outcomes
//! - Routing pipeline section with stepped panels
//! - Answering-machine detection demo with filling jars
//! - Feature grid, pricing and CTA sections with reveal animations
//!
//! All animation behavior is wired after hydration by
//! [`crate::ui::behavior::init_landing_behaviors`]; the markup here only
//! carries the hooks (`.call-demo`, `.amd-demo`, `data-reveal`, ...) those
//! behaviors look up.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

/// Landing page component with visibility-gated animations
#[component]
pub fn LandingPage() -> impl IntoView {
    // Attach observers and sequences once the page is interactive.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            crate::ui::behavior::init_landing_behaviors();
        });
    }

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-slate-950 text-slate-100 overflow-x-hidden">
            <Header />

            // Hero Section
            <section class="min-h-screen flex items-center justify-center relative pt-16 px-4">
                <div class="max-w-5xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h1 class="text-5xl sm:text-6xl font-bold tracking-tight mb-6">
                            "Every call answered. None of them by you."
                        </h1>
                        <p class="text-xl text-slate-400 max-w-xl mb-10 leading-relaxed">
                            "Ringline's voice agents pick up, qualify and route your inbound calls in seconds, around the clock."
                        </p>
                        <div class="flex flex-col sm:flex-row items-start gap-4 mb-12">
                            <a href="#pricing" class="rl-btn-primary">"Start Free"</a>
                            <a href="#call-demo" class="rl-btn-secondary">"Watch It Route"</a>
                        </div>

                        // Animated stat counters
                        <div class="hero-stats grid grid-cols-3 gap-6">
                            <Stat value="99%" label="calls answered" />
                            <Stat value="38" label="sec avg. pickup" />
                            <Stat value="1200+" label="teams onboard" />
                        </div>
                    </div>

                    // Decorative hologram loop, played only while on screen
                    <div class="hero-visual relative hidden lg:block" aria-hidden="true">
                        <video
                            class="w-full rounded-2xl opacity-80"
                            muted
                            loop
                            playsinline
                            preload="none"
                            src="/media/hologram.webm"
                        ></video>
                        <div class="absolute inset-0 -z-10 bg-sky-500/10 blur-3xl rounded-full"></div>
                    </div>
                </div>
            </section>

            // Live call rack demo
            <section id="call-demo" class="py-24 px-4 bg-slate-900/40">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16" data-reveal>
                        <h2 class="text-4xl font-bold mb-4">"Watch a rack of calls route itself"</h2>
                        <p class="text-lg text-slate-400 max-w-2xl mx-auto">
                            "Three lines ring at once. Ringline answers, detects machines, and leaves nothing hanging."
                        </p>
                    </div>

                    <div class="call-demo grid md:grid-cols-3 gap-6">
                        <CallCard caller="Dana M." number="(415) 555-0132" />
                        <CallCard caller="Front Desk" number="(646) 555-0178" />
                        <CallCard caller="Unknown" number="(312) 555-0190" />
                    </div>
                </div>
            </section>

            // Routing pipeline
            <section class="py-24 px-4">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-16" data-reveal>
                        <h2 class="text-4xl font-bold mb-4">"From ring to routed in three moves"</h2>
                    </div>

                    <div class="flow-panels grid md:grid-cols-3 gap-6">
                        <FlowPanel
                            index="1"
                            title="Answer"
                            description="The agent picks up before the second ring, in your greeting and your voice."
                        />
                        <FlowPanel
                            index="2"
                            title="Qualify"
                            description="Intent, urgency and caller identity extracted from the first sentences."
                        />
                        <FlowPanel
                            index="3"
                            title="Route"
                            description="Transferred to the right person, booked, or resolved on the spot."
                        />
                    </div>
                </div>
            </section>

            // Answering-machine detection demo
            <section class="py-24 px-4 bg-slate-900/40">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-16" data-reveal>
                        <h2 class="text-4xl font-bold mb-4">"Machines sorted from people, live"</h2>
                        <p class="text-lg text-slate-400 max-w-2xl mx-auto">
                            "Voicemail greetings are detected mid-ring, so humans never wait behind a robot."
                        </p>
                    </div>

                    <div class="amd-demo grid grid-cols-2 gap-12 max-w-xl mx-auto">
                        <Jar label="People" accent="jar-people" />
                        <Jar label="Machines" accent="jar-machines" />
                    </div>
                </div>
            </section>

            // Features
            <section class="py-24 px-4">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16" data-reveal>
                        <h2 class="text-4xl font-bold mb-4">"Why Ringline?"</h2>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            title="Answers in your voice"
                            description="Clone your greeting once; every caller hears the business, not a bot."
                        />
                        <FeatureCard
                            title="Calendars, not callbacks"
                            description="Qualified callers land straight on your booking calendar."
                        />
                        <FeatureCard
                            title="Transcripts of everything"
                            description="Every call searchable the moment it ends, with outcomes tagged."
                        />
                        <FeatureCard
                            title="Warm transfers"
                            description="Hand the caller over with a whispered summary, never cold."
                        />
                        <FeatureCard
                            title="Spam walled off"
                            description="Robocalls and scanners filtered before they cost a human second."
                        />
                        <FeatureCard
                            title="Up in an afternoon"
                            description="Forward your number, pick a greeting, done. No hardware, no port."
                        />
                    </div>
                </div>
            </section>

            <PricingSection />

            // CTA
            <section class="py-24 px-4 bg-gradient-to-b from-transparent to-slate-900/60">
                <div class="max-w-3xl mx-auto text-center" data-reveal>
                    <h2 class="text-4xl font-bold mb-4">"Stop losing the calls you never hear"</h2>
                    <p class="text-lg text-slate-400 mb-8">
                        "Forward your line to Ringline today and read tonight's transcripts tomorrow."
                    </p>
                    <a href="#pricing" class="rl-btn-primary">"Get Started Free"</a>
                </div>
            </section>

            <Footer />
            <LandingStyles />
        </div>
    }
}

/// Fixed header with anchor navigation
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800/60">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold">"Ringline"</span>
                    </a>

                    <nav class="hidden md:flex items-center gap-6">
                        <a href="#call-demo" class="text-sm font-medium text-slate-400 hover:text-white transition-colors">
                            "Demo"
                        </a>
                        <a href="#pricing" class="text-sm font-medium text-slate-400 hover:text-white transition-colors">
                            "Pricing"
                        </a>
                        <a href="#pricing" class="rl-btn-primary rl-btn-sm">"Start Free"</a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// One hero stat. The numeric part of `value` is animated after hydration;
/// non-numeric values stay static.
#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="stat-value text-3xl font-bold text-sky-400">{value}</div>
            <div class="text-sm text-slate-500 mt-1">{label}</div>
        </div>
    }
}

/// One card of the call rack demo. Its `data-state` cycles through
/// idle / ringing / answered / ended / voicemail under sequencer control;
/// the status badge text comes from CSS per state.
#[component]
fn CallCard(caller: &'static str, number: &'static str) -> impl IntoView {
    view! {
        <div class="call-card rounded-2xl border p-6 transition-colors duration-300" data-state="idle">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <p class="font-semibold">{caller}</p>
                    <p class="text-sm text-slate-500">{number}</p>
                </div>
                <PhoneIcon />
            </div>
            <span class="call-status inline-block px-3 py-1 rounded-full text-xs font-medium"></span>
        </div>
    }
}

/// One step panel of the routing pipeline.
#[component]
fn FlowPanel(
    index: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flow-panel rounded-2xl border p-6 transition-all duration-500" data-state="idle">
            <div class="flow-index w-10 h-10 rounded-full flex items-center justify-center font-bold mb-4">
                {index}
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-sm text-slate-400 leading-relaxed">{description}</p>
        </div>
    }
}

/// One jar of the answering-machine detection demo. Its fill level is driven
/// through the `--fill` style variable.
#[component]
fn Jar(label: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div
                class=format!("jar {} relative h-48 rounded-b-2xl rounded-t-lg border border-slate-700 overflow-hidden", accent)
                data-state="counting"
                style="--fill: 0%"
            >
                <div class="jar-level absolute bottom-0 left-0 right-0"></div>
            </div>
            <p class="mt-3 text-sm text-slate-400">{label}</p>
        </div>
    }
}

/// Feature card with reveal-on-scroll
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div
            class="bg-slate-900/60 p-6 rounded-xl border border-slate-800 hover:border-sky-500/50 transition-all duration-300"
            data-reveal
        >
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-slate-400 text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-24 px-4 bg-slate-900/40">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-16" data-reveal>
                    <h2 class="text-4xl font-bold mb-4">"Simple, per-line pricing"</h2>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    <PricingCard
                        name="Solo"
                        price="$0"
                        period="forever"
                        features=vec!["1 line", "50 answered calls / mo", "Transcripts"]
                        highlighted=false
                    />
                    <PricingCard
                        name="Team"
                        price="$49"
                        period="/line/month"
                        features=vec![
                            "Unlimited answered calls",
                            "Warm transfers & routing rules",
                            "Machine detection",
                            "Calendar booking",
                        ]
                        highlighted=true
                    />
                    <PricingCard
                        name="Switchboard"
                        price="$199"
                        period="/month"
                        features=vec![
                            "Everything in Team",
                            "10 lines included",
                            "Custom voices",
                            "Priority support",
                        ]
                        highlighted=false
                    />
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: Vec<&'static str>,
    highlighted: bool,
) -> impl IntoView {
    let card_class = if highlighted {
        "relative bg-slate-900 p-8 rounded-2xl border-2 border-sky-500 shadow-xl"
    } else {
        "bg-slate-900/60 p-8 rounded-2xl border border-slate-800"
    };

    view! {
        <div class=card_class data-reveal>
            {highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-sky-500 text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold mb-2">{name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold">{price}</span>
                    <span class="text-slate-400">{period}</span>
                </div>
            </div>

            <ul class="space-y-3 mb-8">
                {features.into_iter().map(|feature| {
                    view! {
                        <li class="flex items-center gap-3 text-sm">
                            <CheckIcon />
                            <span>{feature}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <a
                href="#"
                class=if highlighted { "rl-btn-primary block text-center" } else { "rl-btn-secondary block text-center" }
            >
                "Choose " {name}
            </a>
        </div>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Ringline - AI voice agents for inbound calls" />

        <Meta name="description" content="Ringline answers, qualifies and routes your inbound calls with AI voice agents. Machine detection, warm transfers and transcripts, live in an afternoon." />
        <Meta name="keywords" content="AI receptionist, call answering, call routing, voicemail detection, voice agent, inbound calls" />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://ringline.app/" />
        <Meta property="og:title" content="Ringline - AI voice agents for inbound calls" />
        <Meta property="og:description" content="Every call answered. None of them by you." />

        <Link rel="canonical" href="https://ringline.app/" />
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-sky-400 to-blue-600 rounded-xl flex items-center justify-center shadow-lg">
            <PhoneIcon />
        </div>
    }
}

/// Phone icon
#[component]
fn PhoneIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z" />
        </svg>
    }
}

/// Check icon
#[component]
fn CheckIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5 text-emerald-400 flex-shrink-0" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
        </svg>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <Logo />
                    <span class="text-lg font-bold">"Ringline"</span>
                </div>
                <span class="text-sm text-slate-500">
                    "© 2026 Ringline. Built with Rust & Leptos."
                </span>
            </div>
        </footer>
    }
}

/// Scoped CSS for the animated regions. The sequencer only flips
/// `data-state` attributes and the `--fill` variable; everything visual
/// lives here.
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Buttons */
            .rl-btn-primary {
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                color: white;
                background-color: #0284c7;
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
            }
            .rl-btn-primary:hover { transform: scale(1.04); background-color: #0369a1; }
            .rl-btn-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }

            .rl-btn-secondary {
                padding: 0.875rem 1.75rem;
                font-weight: 600;
                border: 2px solid #475569;
                border-radius: 0.75rem;
                color: #e2e8f0;
                transition: all 0.3s;
            }
            .rl-btn-secondary:hover { transform: scale(1.04); border-color: #0ea5e9; }

            /* Reveal regions: visible by default (no-JS fallback), hidden
               only once the observer marks them out. */
            [data-reveal] {
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            [data-reveal][data-state='out'] {
                opacity: 0;
                transform: translateY(30px);
            }

            /* Hero stats fade */
            .stat-value { transition: opacity 0.5s ease-out; }
            .stat-value[data-state='out'] { opacity: 0; }

            /* Call cards */
            .call-card { border-color: #1e293b; background: rgba(15, 23, 42, 0.6); }
            .call-card .call-status { background: #1e293b; color: #64748b; }
            .call-card .call-status::after { content: 'Idle'; }
            .call-card[data-state='ringing'] { border-color: #0ea5e9; }
            .call-card[data-state='ringing'] .call-status { background: rgba(14, 165, 233, 0.15); color: #38bdf8; }
            .call-card[data-state='ringing'] .call-status::after { content: 'Ringing…'; }
            .call-card[data-state='answered'] { border-color: #10b981; }
            .call-card[data-state='answered'] .call-status { background: rgba(16, 185, 129, 0.15); color: #34d399; }
            .call-card[data-state='answered'] .call-status::after { content: 'Answered'; }
            .call-card[data-state='ended'] { border-color: #334155; opacity: 0.7; }
            .call-card[data-state='ended'] .call-status::after { content: 'Ended'; }
            .call-card[data-state='voicemail'] { border-color: #a855f7; }
            .call-card[data-state='voicemail'] .call-status { background: rgba(168, 85, 247, 0.15); color: #c084fc; }
            .call-card[data-state='voicemail'] .call-status::after { content: 'Voicemail'; }

            @keyframes rl-ring-pulse {
                0%, 100% { box-shadow: 0 0 0 0 rgba(14, 165, 233, 0.4); }
                50% { box-shadow: 0 0 0 12px rgba(14, 165, 233, 0); }
            }
            .call-card[data-state='ringing'] { animation: rl-ring-pulse 1s ease-in-out infinite; }

            /* Flow panels */
            .flow-panel { border-color: #1e293b; background: rgba(15, 23, 42, 0.5); }
            .flow-panel .flow-index { background: #1e293b; color: #64748b; }
            .flow-panel[data-state='active'] { border-color: #0ea5e9; transform: translateY(-4px); }
            .flow-panel[data-state='active'] .flow-index { background: #0ea5e9; color: white; }
            .flow-panel[data-state='done'] .flow-index { background: #10b981; color: white; }

            /* AMD jars */
            .jar-level { height: var(--fill, 0%); transition: height 0.5s ease-out; }
            .jar-people .jar-level { background: linear-gradient(to top, #10b981, #34d399); }
            .jar-machines .jar-level { background: linear-gradient(to top, #7c3aed, #a78bfa); }
            .jar[data-state='settled'] { border-color: #475569; }
            "#
        </style>
    }
}
