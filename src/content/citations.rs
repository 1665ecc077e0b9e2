use serde::Serialize;

/// One entry of the works cited list
#[derive(Debug, Clone, Serialize)]
pub struct Citation {
    pub id: u8,
    pub text: &'static str,
}

pub static CITATIONS: &[Citation] = &[
    Citation {
        id: 1,
        text: "AP Archive. \"Space Tourist Dennis Tito Speaks about His Trip.\" YouTube, July 21, 2015. https://www.youtube.com/watch?v=mKAIL8DDemg.",
    },
    Citation {
        id: 2,
        text: "Asu.edu. \"Section 6: Recent History | Center for American Civics.\" 2025. https://civics.asu.edu/civic-literacy-curriculum/section6.",
    },
    Citation {
        id: 3,
        text: "Dourado, Eli. \"A 2006 NASA Program Shows How Government Can Move at the Speed of Startups.\" The CGO, March 1, 2021. https://www.thecgo.org/benchmark/a-2006-nasa-program-shows-how-government-can-move-at-the-speed-of-startups/.",
    },
    Citation {
        id: 4,
        text: "Greenspan, Jesse. \"Remembering the Apollo 8 Christmas Eve Broadcast | HISTORY.\" HISTORY, November 23, 2015. https://www.history.com/articles/remembering-the-apollo-8-christmas-eve-broadcast.",
    },
    Citation {
        id: 5,
        text: "Harwood, William. \"SpaceX Pulls off Dramatic Falcon 9 Launch, Landing.\" Cbsnews.com. CBSNews, December 22, 2015. https://www.cbsnews.com/news/spacex-pulls-off-dramatic-falcon-9-launch-landing/.",
    },
    Citation {
        id: 6,
        text: "Internet Archive. \"THE TWELVE GEMINI MISSIONS NASA GEMINI PROGRAM FILM 78084 : Free Download, Borrow, and Streaming : Internet Archive.\" 2017. https://archive.org/details/78084TheTwelveGemini.",
    },
    Citation {
        id: 7,
        text: "Kelvey, Jon. \"65 Years Ago, the First American Satellite Radically Reshaped the Space Race.\" Inverse, February 1, 2023. https://www.inverse.com/science/explorer-1-launch-anniversary.",
    },
    Citation {
        id: 8,
        text: "Luscombe, Richard. \"Musk Says Humans Can Be on Mars in Four Years. Many Laugh, but Some See Purpose.\" the Guardian. The Guardian, September 15, 2024. https://www.theguardian.com/technology/2024/sep/15/musk-humans-live-on-mars-spacex.",
    },
    Citation {
        id: 9,
        text: "Loff, Sarah. \"Apollo 11 Mission Overview - NASA.\" NASA. NASA, April 17, 2015. https://www.nasa.gov/history/apollo-11-mission-overview/.",
    },
    Citation {
        id: 10,
        text: "Loff, Sarah. \"Explorer 1 Overview - NASA.\" NASA, March 18, 2015. https://www.nasa.gov/history/explorer-1-overview/.",
    },
    Citation {
        id: 11,
        text: "Malik, Tariq. \"SpaceX Successfully Launches Falcon 1 Rocket into Orbit.\" Space.com, December 13, 2019. https://www.space.com/5905-spacex-successfully-launches-falcon-1-rocket-orbit.html.",
    },
    Citation {
        id: 12,
        text: "NASA. \"Apollo 8: Earthrise - NASA.\" NASA, December 23, 2020. https://www.nasa.gov/image-article/apollo-8-earthrise/.",
    },
    Citation {
        id: 13,
        text: "NASA. \"International GeoPhysical Year--US Announcement.\" Nasa.gov, 2025. https://www.nasa.gov/history/sputnik/usannounce.html.",
    },
    Citation {
        id: 14,
        text: "NASA. \"Unity Module - NASA.\" NASA. Accessed December 5, 2025. https://www.nasa.gov/international-space-station/unity-module/.",
    },
    Citation {
        id: 15,
        text: "NASA. \"Wernher von Braun.\" NASA, February 6, 2024. https://www.nasa.gov/people/wernher-von-braun/.",
    },
    Citation {
        id: 16,
        text: "NASA ON THE AIR. \"30 Years of International Collaboration on the ISS,\" November 4, 2023. https://nasaontheair.wordpress.com/2023/11/04/55-years-of-international-collaboration-on-the-iss/.",
    },
    Citation {
        id: 17,
        text: "Neufeld, Michael. \"First American in Space: The Flight of Alan B. Shepard.\" airandspace.si.edu, May 5, 2021. https://airandspace.si.edu/stories/editorial/first-american-space-flight-alan-b-shepard.",
    },
    Citation {
        id: 18,
        text: "Parissa DJangi. \"The True Story of the Secret Program That Brought Nazi Scientists to the U.S.\" History. National Geographic, May 12, 2025. https://www.nationalgeographic.com/history/article/operation-paperclip.",
    },
    Citation {
        id: 19,
        text: "Peters, Gerhard, and John Woolley. \"Remarks at the Presentation of NASA's Distinguished Service Medal to Astronaut Alan B. Shepard. | the American Presidency Project.\" Ucsb.edu, 2025. https://www.presidency.ucsb.edu/documents/remarks-the-presentation-nasas-distinguished-service-medal-astronaut-alan-b-shepard.",
    },
    Citation {
        id: 20,
        text: "Peters, Gerhard, and John Woolley. \"Statement by the President upon Signing the National Aeronautics and Space Act of 1958. | the American Presidency Project.\" www.presidency.ucsb.edu. Accessed December 5, 2025. https://www.presidency.ucsb.edu/documents/statement-the-president-upon-signing-the-national-aeronautics-and-space-act-1958.",
    },
    Citation {
        id: 21,
        text: "Saad, Lydia. \"Gallup Vault: Building Faith in U.S. Space Exploration.\" Gallup.com. Gallup, June 3, 2016. https://news.gallup.com/vault/192293/gallup-vault-building-faith-space-exploration.aspx.",
    },
    Citation {
        id: 22,
        text: "SpaceX. \"SpaceX - Falcon 1, Flight 4.\" YouTube, November 12, 2010. https://www.youtube.com/watch?v=dLQ2tZEH6G0.",
    },
    Citation {
        id: 23,
        text: "SpaceX. \"SpaceX.\" SpaceX, 2025. https://www.spacex.com/vehicles/starship.",
    },
    Citation {
        id: 24,
        text: "Uri, John. \"65 Years Ago: The National Aeronautics and Space Act of 1958 Creates NASA - NASA.\" NASA, July 26, 2023. https://www.nasa.gov/history/65-years-ago-the-national-aeronautics-and-space-act-of-1958-creates-nasa/.",
    },
    Citation {
        id: 25,
        text: "Wall, Mike. \"First Space Tourist: How a U.S. Millionaire Bought a Ticket to Orbit.\" Space.com. Space, April 27, 2011. https://www.space.com/11492-space-tourism-pioneer-dennis-tito.html.",
    },
    Citation {
        id: 26,
        text: "Wall, Mike. \"SpaceX Rocket Landing Is a Giant Leap toward a City on Mars, Elon Musk Says.\" Space.com. Space, December 22, 2015. https://www.space.com/31445-spacex-rocket-landing-mars-colony-elon-musk.html.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_citation_list() {
        assert_eq!(CITATIONS.len(), 26);
        for (idx, citation) in CITATIONS.iter().enumerate() {
            assert_eq!(citation.id as usize, idx + 1);
            assert!(!citation.text.is_empty());
        }
    }
}
